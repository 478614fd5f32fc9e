//! Knowledge Base - static FAQ table for the AFOA website.
//!
//! Topics are declared in priority order: when two topics score the same,
//! the one declared first answers.

/// A static FAQ entry with its keywords and canned response
#[derive(Debug, PartialEq, Eq)]
pub struct Topic {
    /// Identifier of the topic (e.g. "training")
    pub name: &'static str,
    /// Lowercase keywords, matched as substrings of the lowercased input
    pub keywords: &'static [&'static str],
    /// Response returned verbatim when this topic wins
    pub response: &'static str,
}

/// Preset query offered next to the input box
#[derive(Debug, PartialEq, Eq)]
pub struct QuickAction {
    /// Button label
    pub label: &'static str,
    /// Console command that triggers the action (without the leading `/`)
    pub command: &'static str,
    /// Representative keywords; the first one is submitted as the query
    pub keywords: &'static [&'static str],
}

impl QuickAction {
    /// The query submitted on behalf of the user
    pub fn query(&self) -> &'static str {
        self.keywords.first().copied().unwrap_or(self.label)
    }
}

pub const GREETING: &str = "Hello! I'm the AFOA Navigation Assistant. I can help you find information about the Airport Fire Officers Association website, including membership, training, events, suppliers, and job opportunities. How can I assist you today?";

pub const FALLBACK_RESPONSE: &str = "I'm not sure about that specific question. I can help you with information about:\n\n• AFOA membership and benefits\n• Upcoming events and conferences\n• Training providers and courses\n• Equipment suppliers and manufacturers\n• Job vacancies and career opportunities\n• Contact information and committee details\n\nTry asking about any of these topics, or use the quick action buttons below!";

pub const TOPICS: &[Topic] = &[
    Topic {
        name: "about",
        keywords: &["about", "what is", "afoa", "organization", "mission", "purpose"],
        response: "The Airport Fire Officers Association (AFOA) is a professional organization dedicated to supporting and advancing the interests of airport fire officers and fire services. We focus on promoting high standards in airport fire safety, emergency response, and leadership through training, information sharing, and collaboration. AFOA provides a platform for members to exchange knowledge, discuss industry developments, and enhance their skills in fire safety management.",
    },
    Topic {
        name: "membership",
        keywords: &["member", "join", "membership", "benefits", "how to join"],
        response: "AFOA has increasingly become more international and welcomes members from across the globe. We have member airports from around the world including major UK airports like Heathrow, Gatwick, Manchester, and international airports like Dubai and Shannon. For membership information, please visit our 'Current Members' section or contact us directly through the website.",
    },
    Topic {
        name: "events",
        keywords: &["event", "conference", "training", "workshop", "calendar"],
        response: "Our upcoming major event is the AFOA/ARFF Conference 2025 (28-30th April 2025). This year's conference focuses on operational response and includes keynote speakers, industry updates from CAA/FAA, international fire chiefs, advanced aviation tactics, and workshops on contaminants & cancers. The conference also features an overview and visit to Dublin Airport Fire Station. Exhibitors and sponsors can express interest until January 15th.",
    },
    Topic {
        name: "training",
        keywords: &["training", "course", "education", "learn", "certification"],
        response: "AFOA partners with several accredited training providers:\n\n• Newcastle International Training Academy - Accredited firefighting and safety courses\n• Emergency Response Driver Training Ltd (ERDT) - RoSPA accredited airport fire service driver training\n• SimTrainerUK Ltd - Interactive and immersive training courses\n• Serco International Fire Training Centre - Aviation fire training since 1981\n• Fire Service College - Over 40 years of fire safety training experience\n\nThese providers offer various specializations including aviation firefighting, high-speed driver training, and emergency response.",
    },
    Topic {
        name: "suppliers",
        keywords: &["supplier", "equipment", "manufacturer", "vendor", "products"],
        response: "AFOA works with numerous suppliers and manufacturers in the aviation fire safety industry. Key suppliers include:\n\n• Vehicle Manufacturers: Rosenbauer UK Ltd, Emergency One UK Ltd, Terberg DTS UK Ltd\n• Equipment Suppliers: Angloco Ltd, Cold Cut Systems, Delta Fire Ltd\n• Safety Equipment: GORE-TEX Professional Fabrics, Hunter Apparel Solutions, Steroplast Healthcare\n• Training Equipment: Flaim Systems, KFT Fire Trainer GmbH\n• Technology: Redkite Systems, Rescue Intellitech UK Ltd\n\nFor the complete list of suppliers and direct links to their websites, visit our Commercial section.",
    },
    Topic {
        name: "jobs",
        keywords: &["job", "career", "vacancy", "employment", "firefighter", "position"],
        response: "Our Job Vacancies section features the latest opportunities in airport firefighting and officer roles. Current opportunities include:\n\n• Trainee Firefighter positions at various airports\n• Full-time permanent positions with competitive salaries\n• Recent listings include positions at Edinburgh Airport and other major UK airports\n\nSalaries typically range from £41,438 to £43,674+ with shift allowances. We regularly update job listings, so check back often for new opportunities.",
    },
    Topic {
        name: "contact",
        keywords: &["contact", "reach", "get in touch", "email", "phone"],
        response: "You can contact AFOA through our website at www.afoa.org.uk. We also maintain a presence on social media including Facebook and Twitter (@AFOA_UK). For specific inquiries about membership, training, or partnerships, please use the contact forms available on our website.",
    },
    Topic {
        name: "committee",
        keywords: &["committee", "leadership", "chair", "board", "officers"],
        response: "The AFOA is led by a dedicated committee. Our current Chairperson is Waine Weaver, who has served on the committee since 2019. Waine began his fire service career in the Fleet Air Arm of the Royal Navy in 1992 and has extensive experience in airport fire services. For more information about our committee members and their backgrounds, visit the 'Our Committee' section.",
    },
];

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        label: "Upcoming Events",
        command: "events",
        keywords: &["event", "conference"],
    },
    QuickAction {
        label: "Membership Info",
        command: "membership",
        keywords: &["member", "join"],
    },
    QuickAction {
        label: "Suppliers",
        command: "suppliers",
        keywords: &["supplier", "equipment"],
    },
    QuickAction {
        label: "Training",
        command: "training",
        keywords: &["training", "course"],
    },
    QuickAction {
        label: "Job Vacancies",
        command: "jobs",
        keywords: &["job", "career"],
    },
];

/// Looks up a topic by name
#[cfg(test)]
pub fn topic(name: &str) -> Option<&'static Topic> {
    TOPICS.iter().find(|t| t.name == name)
}

/// Looks up a quick action by its console command
pub fn quick_action(command: &str) -> Option<&'static QuickAction> {
    QUICK_ACTIONS
        .iter()
        .find(|a| a.command.eq_ignore_ascii_case(command))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_topic_names_are_unique() {
        let names: HashSet<&str> = TOPICS.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), TOPICS.len());
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for topic in TOPICS {
            assert!(!topic.keywords.is_empty(), "{} has no keywords", topic.name);
            for keyword in topic.keywords {
                assert_eq!(*keyword, keyword.to_lowercase(), "in topic {}", topic.name);
            }
        }
    }

    #[test]
    fn test_quick_action_lookup() {
        let action = quick_action("Jobs").expect("jobs action");
        assert_eq!(action.query(), "job");
        assert!(quick_action("weather").is_none());
    }
}
