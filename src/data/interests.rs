//! The interest catalog and its category filter tabs.

/// Sentinel category id that matches every interest.
pub const ALL_CATEGORY: &str = "all";

/// A filter tab over the interest catalog.
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
}

pub static CATEGORIES: [Category; 7] = [
    Category { id: "all", name: "All Interests" },
    Category { id: "technology", name: "Technology" },
    Category { id: "creative", name: "Creative Arts" },
    Category { id: "business", name: "Business & Finance" },
    Category { id: "science", name: "Science & Research" },
    Category { id: "social", name: "Social Impact" },
    Category { id: "health", name: "Health & Medicine" },
];

/// A selectable interest area.
pub struct Interest {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub icon: &'static str,
}

/// How many catalog interests a category tab covers. Counts the full
/// catalog, never the currently filtered view.
pub fn category_count(category_id: &str) -> usize {
    if category_id == ALL_CATEGORY {
        return INTERESTS.len();
    }
    INTERESTS.iter().filter(|i| i.category == category_id).count()
}

pub static INTERESTS: [Interest; 26] = [
    Interest {
        id: "programming",
        name: "Programming & Coding",
        description: "Building software and applications",
        category: "technology",
        icon: "💻",
    },
    Interest {
        id: "ai-ml",
        name: "Artificial Intelligence",
        description: "Machine learning and AI development",
        category: "technology",
        icon: "🤖",
    },
    Interest {
        id: "cybersecurity",
        name: "Cybersecurity",
        description: "Protecting digital systems and data",
        category: "technology",
        icon: "🔒",
    },
    Interest {
        id: "web-design",
        name: "Web Design",
        description: "Creating beautiful and functional websites",
        category: "technology",
        icon: "🎨",
    },
    Interest {
        id: "data-science",
        name: "Data Science",
        description: "Analyzing data to find insights",
        category: "technology",
        icon: "📊",
    },
    Interest {
        id: "graphic-design",
        name: "Graphic Design",
        description: "Visual communication and branding",
        category: "creative",
        icon: "🎨",
    },
    Interest {
        id: "photography",
        name: "Photography",
        description: "Capturing moments and stories",
        category: "creative",
        icon: "📸",
    },
    Interest {
        id: "writing",
        name: "Creative Writing",
        description: "Storytelling and content creation",
        category: "creative",
        icon: "✍️",
    },
    Interest {
        id: "music",
        name: "Music Production",
        description: "Creating and producing music",
        category: "creative",
        icon: "🎵",
    },
    Interest {
        id: "filmmaking",
        name: "Film & Video",
        description: "Creating visual stories and content",
        category: "creative",
        icon: "🎬",
    },
    Interest {
        id: "entrepreneurship",
        name: "Entrepreneurship",
        description: "Starting and running businesses",
        category: "business",
        icon: "🚀",
    },
    Interest {
        id: "finance",
        name: "Finance & Investment",
        description: "Managing money and investments",
        category: "business",
        icon: "💰",
    },
    Interest {
        id: "marketing",
        name: "Digital Marketing",
        description: "Promoting products and services online",
        category: "business",
        icon: "📈",
    },
    Interest {
        id: "consulting",
        name: "Business Consulting",
        description: "Helping businesses solve problems",
        category: "business",
        icon: "💼",
    },
    Interest {
        id: "research",
        name: "Scientific Research",
        description: "Discovering new knowledge",
        category: "science",
        icon: "🔬",
    },
    Interest {
        id: "biotechnology",
        name: "Biotechnology",
        description: "Using biology to solve problems",
        category: "science",
        icon: "🧬",
    },
    Interest {
        id: "environmental",
        name: "Environmental Science",
        description: "Protecting our planet",
        category: "science",
        icon: "🌱",
    },
    Interest {
        id: "physics",
        name: "Physics & Astronomy",
        description: "Understanding the universe",
        category: "science",
        icon: "🌌",
    },
    Interest {
        id: "education",
        name: "Teaching & Education",
        description: "Helping others learn and grow",
        category: "social",
        icon: "📚",
    },
    Interest {
        id: "social-work",
        name: "Social Work",
        description: "Supporting communities and individuals",
        category: "social",
        icon: "🤝",
    },
    Interest {
        id: "ngo",
        name: "Non-Profit Work",
        description: "Making a positive social impact",
        category: "social",
        icon: "❤️",
    },
    Interest {
        id: "psychology",
        name: "Psychology",
        description: "Understanding human behavior",
        category: "social",
        icon: "🧠",
    },
    Interest {
        id: "medicine",
        name: "Medicine & Surgery",
        description: "Healing and treating patients",
        category: "health",
        icon: "⚕️",
    },
    Interest {
        id: "nursing",
        name: "Nursing",
        description: "Caring for patients and families",
        category: "health",
        icon: "👩‍⚕️",
    },
    Interest {
        id: "pharmacy",
        name: "Pharmacy",
        description: "Medication and drug development",
        category: "health",
        icon: "💊",
    },
    Interest {
        id: "physiotherapy",
        name: "Physiotherapy",
        description: "Helping people recover and move",
        category: "health",
        icon: "🏃‍♂️",
    },
];
