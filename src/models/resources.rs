use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    /// Immediate danger to self or others
    Emergency,
    Hotline,
    TextLine,
    Online,
    International,
}

#[derive(Debug, Clone, Serialize)]
pub struct CrisisResource {
    pub category: ResourceCategory,
    pub name: &'static str,
    pub contact: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'static str>,
}

pub static CRISIS_RESOURCES: &[CrisisResource] = &[
    CrisisResource {
        category: ResourceCategory::Emergency,
        name: "Emergency Services",
        contact: "Call 999 (Kenya), 911 (US) or your local emergency number",
        description: "If you or someone you know is in immediate danger, call emergency services right away.",
        url: None,
    },
    CrisisResource {
        category: ResourceCategory::Hotline,
        name: "988 Suicide & Crisis Lifeline (US)",
        contact: "988 or 1-800-273-8255",
        description: "24/7, free and confidential support for people in distress.",
        url: Some("https://988lifeline.org"),
    },
    CrisisResource {
        category: ResourceCategory::Hotline,
        name: "National Suicide Prevention Lifeline (Kenya)",
        contact: "999",
        description: "24/7, free and confidential support for people in distress.",
        url: None,
    },
    CrisisResource {
        category: ResourceCategory::TextLine,
        name: "Crisis Text Line",
        contact: "Text HOME to 741741",
        description: "24/7 text support with a trained crisis counselor.",
        url: Some("https://www.crisistextline.org"),
    },
    CrisisResource {
        category: ResourceCategory::Online,
        name: "Nairobi Mental Health Services",
        contact: "www.nmhs.or.ke",
        description: "Information, resources, and support for individuals and families.",
        url: Some("https://www.nmhs.or.ke"),
    },
    CrisisResource {
        category: ResourceCategory::Online,
        name: "Mental Health America",
        contact: "www.mhanational.org",
        description: "Mental health screening tools and resources.",
        url: Some("https://www.mhanational.org"),
    },
    CrisisResource {
        category: ResourceCategory::International,
        name: "International Association for Suicide Prevention",
        contact: "Find a Crisis Center",
        description: "Directory of crisis centers around the world.",
        url: Some("https://www.iasp.info/resources/Crisis_Centres/"),
    },
    CrisisResource {
        category: ResourceCategory::International,
        name: "Befrienders Worldwide",
        contact: "www.befrienders.org",
        description: "Volunteer support to people in emotional distress or at risk of suicide.",
        url: Some("https://www.befrienders.org"),
    },
];
