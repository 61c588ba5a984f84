//! Expanded detail records for the deep-dive course view.
//!
//! Only part of the catalog has a detail record yet. The course view falls
//! back to summary data when one is missing rather than hiding the course.

use super::courses::{Course, COURSES};

/// One year of the course curriculum.
pub struct CurriculumYear {
    pub year: u8,
    pub subjects: &'static [&'static str],
}

/// A job role this course commonly leads to.
pub struct JobRole {
    pub title: &'static str,
    pub description: &'static str,
    pub average_salary: &'static str,
    pub companies: &'static [&'static str],
}

/// The deep-dive record for one course. `summary` points into [`COURSES`]
/// so the two views can never disagree on the shared fields.
pub struct CourseDetail {
    pub summary: &'static Course,
    pub curriculum: &'static [CurriculumYear],
    pub admission_process: &'static [&'static str],
    pub job_roles: &'static [JobRole],
    pub prerequisites: &'static [&'static str],
    pub future_scope: &'static [&'static str],
}

pub static COURSE_DETAILS: [CourseDetail; 2] = [
    CourseDetail {
        summary: &COURSES[0],
        curriculum: &[
            CurriculumYear {
                year: 1,
                subjects: &["Programming Fundamentals", "Mathematics", "Physics", "Digital Logic", "Communication Skills"],
            },
            CurriculumYear {
                year: 2,
                subjects: &["Data Structures", "Computer Organization", "Database Systems", "Operating Systems", "Statistics"],
            },
            CurriculumYear {
                year: 3,
                subjects: &["Algorithms", "Software Engineering", "Computer Networks", "Machine Learning", "Web Development"],
            },
            CurriculumYear {
                year: 4,
                subjects: &["Artificial Intelligence", "Cybersecurity", "Mobile Development", "Project Work", "Internship"],
            },
        ],
        admission_process: &[
            "JEE Main qualification required",
            "JEE Advanced for IITs",
            "State-level entrance exams (BITSAT, VITEEE, etc.)",
            "Direct admission based on 12th marks in some colleges",
            "Counseling and seat allocation",
        ],
        job_roles: &[
            JobRole {
                title: "Software Engineer",
                description: "Design, develop, and maintain software applications and systems",
                average_salary: "₹6-20 LPA",
                companies: &["Google", "Microsoft", "Amazon", "Flipkart", "TCS"],
            },
            JobRole {
                title: "Data Scientist",
                description: "Analyze complex data to help companies make better decisions",
                average_salary: "₹8-25 LPA",
                companies: &["Netflix", "Uber", "Swiggy", "Paytm", "IBM"],
            },
            JobRole {
                title: "Product Manager",
                description: "Lead product development and strategy for tech companies",
                average_salary: "₹12-35 LPA",
                companies: &["Facebook", "LinkedIn", "Zomato", "PhonePe", "Razorpay"],
            },
        ],
        prerequisites: &[
            "Strong foundation in Mathematics",
            "Basic understanding of Physics",
            "Logical thinking and problem-solving skills",
            "Interest in technology and programming",
        ],
        future_scope: &[
            "Artificial Intelligence and Machine Learning",
            "Cybersecurity and Ethical Hacking",
            "Cloud Computing and DevOps",
            "Blockchain Technology",
            "Internet of Things (IoT)",
            "Quantum Computing",
        ],
    },
    CourseDetail {
        summary: &COURSES[1],
        curriculum: &[
            CurriculumYear {
                year: 1,
                subjects: &["Statistics", "Mathematics", "Programming Basics", "Data Structures", "Business Fundamentals"],
            },
            CurriculumYear {
                year: 2,
                subjects: &["Machine Learning", "Database Systems", "Data Visualization", "Probability", "Research Methods"],
            },
            CurriculumYear {
                year: 3,
                subjects: &["Deep Learning", "Big Data Analytics", "Natural Language Processing", "Time Series", "Capstone Project"],
            },
        ],
        admission_process: &[
            "Entrance exams like JEE Main, BITSAT",
            "Some colleges have dedicated Data Science entrance tests",
            "Portfolio and interview for specialized programs",
            "Merit-based admission in some universities",
        ],
        job_roles: &[
            JobRole {
                title: "Data Scientist",
                description: "Extract insights from complex datasets using statistical and ML techniques",
                average_salary: "₹8-22 LPA",
                companies: &["Google", "Amazon", "Flipkart", "Ola", "Paytm"],
            },
            JobRole {
                title: "Business Analyst",
                description: "Analyze business data to help organizations make informed decisions",
                average_salary: "₹5-15 LPA",
                companies: &["Deloitte", "McKinsey", "Accenture", "EY", "KPMG"],
            },
        ],
        prerequisites: &[
            "Strong mathematical foundation",
            "Basic programming knowledge",
            "Statistical thinking",
            "Curiosity about data patterns",
        ],
        future_scope: &[
            "Artificial Intelligence",
            "Business Intelligence",
            "Predictive Analytics",
            "Data Engineering",
            "Research and Academia",
        ],
    },
];
