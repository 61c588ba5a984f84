//! The recommendable course catalog.

use ratzilla::ratatui::style::Color;

/// How demanding a course is to get through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Difficulty::Easy => Color::Green,
            Difficulty::Medium => Color::Yellow,
            Difficulty::Hard => Color::Red,
        }
    }
}

/// Color band for a match percentage: strong, decent, or weak fit.
pub fn match_color(percentage: u8) -> Color {
    if percentage >= 85 {
        Color::Green
    } else if percentage >= 70 {
        Color::Yellow
    } else {
        Color::LightRed
    }
}

/// A recommendable course summary.
pub struct Course {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub eligibility: &'static [&'static str],
    /// Display string like "₹8-25 LPA"; the sorter parses it.
    pub average_salary: &'static str,
    pub job_prospects: &'static str,
    pub match_percentage: u8,
    pub category: &'static str,
    pub difficulty: Difficulty,
    pub popularity: u8,
    pub key_skills: &'static [&'static str],
    pub career_paths: &'static [&'static str],
    pub top_colleges: &'static [&'static str],
}

pub static COURSES: [Course; 5] = [
    Course {
        id: "computer-science",
        name: "Computer Science Engineering",
        description: "Comprehensive program covering programming, algorithms, software development, and emerging technologies like AI and machine learning.",
        duration: "4 years",
        eligibility: &["Science (PCM)", "Mathematics", "Physics", "Chemistry"],
        average_salary: "₹8-25 LPA",
        job_prospects: "Excellent",
        match_percentage: 95,
        category: "Engineering",
        difficulty: Difficulty::Medium,
        popularity: 92,
        key_skills: &["Programming", "Problem Solving", "Data Structures", "Software Development"],
        career_paths: &["Software Engineer", "Data Scientist", "Product Manager", "Tech Entrepreneur"],
        top_colleges: &["IIT Delhi", "IIT Bombay", "BITS Pilani", "VIT Vellore"],
    },
    Course {
        id: "data-science",
        name: "Data Science & Analytics",
        description: "Interdisciplinary field combining statistics, programming, and domain expertise to extract insights from data.",
        duration: "3-4 years",
        eligibility: &["Science (PCM)", "Mathematics", "Statistics"],
        average_salary: "₹6-20 LPA",
        job_prospects: "Excellent",
        match_percentage: 88,
        category: "Technology",
        difficulty: Difficulty::Medium,
        popularity: 85,
        key_skills: &["Statistics", "Python/R", "Machine Learning", "Data Visualization"],
        career_paths: &["Data Scientist", "Business Analyst", "ML Engineer", "Research Scientist"],
        top_colleges: &["ISI Kolkata", "IIT Madras", "IIIT Hyderabad", "Manipal University"],
    },
    Course {
        id: "graphic-design",
        name: "Graphic Design & Visual Communication",
        description: "Creative program focusing on visual storytelling, branding, digital design, and user experience.",
        duration: "3-4 years",
        eligibility: &["Any Stream", "Portfolio Required"],
        average_salary: "₹4-12 LPA",
        job_prospects: "Good",
        match_percentage: 82,
        category: "Design",
        difficulty: Difficulty::Easy,
        popularity: 78,
        key_skills: &["Adobe Creative Suite", "Typography", "Branding", "UI/UX Design"],
        career_paths: &["Graphic Designer", "UI/UX Designer", "Brand Manager", "Creative Director"],
        top_colleges: &["NID Ahmedabad", "Pearl Academy", "MIT Institute of Design", "Srishti School"],
    },
    Course {
        id: "business-administration",
        name: "Business Administration (BBA)",
        description: "Comprehensive business education covering management, finance, marketing, and entrepreneurship.",
        duration: "3 years",
        eligibility: &["Any Stream", "Commerce Preferred"],
        average_salary: "₹5-15 LPA",
        job_prospects: "Good",
        match_percentage: 75,
        category: "Business",
        difficulty: Difficulty::Easy,
        popularity: 88,
        key_skills: &["Leadership", "Communication", "Strategic Thinking", "Financial Analysis"],
        career_paths: &["Business Manager", "Marketing Executive", "Consultant", "Entrepreneur"],
        top_colleges: &["Shaheed Sukhdev College", "Christ University", "Symbiosis", "NMIMS"],
    },
    Course {
        id: "biotechnology",
        name: "Biotechnology",
        description: "Interdisciplinary field combining biology and technology to develop products and solutions for healthcare, agriculture, and environment.",
        duration: "4 years",
        eligibility: &["Science (PCB)", "Biology", "Chemistry", "Physics/Math"],
        average_salary: "₹4-12 LPA",
        job_prospects: "Good",
        match_percentage: 70,
        category: "Science",
        difficulty: Difficulty::Hard,
        popularity: 65,
        key_skills: &["Laboratory Skills", "Research Methods", "Molecular Biology", "Data Analysis"],
        career_paths: &["Research Scientist", "Biotech Engineer", "Quality Control Analyst", "Product Manager"],
        top_colleges: &["JNU Delhi", "IIT Roorkee", "VIT Vellore", "SRM University"],
    },
];
