//! Application configuration and constants
//!
//! The skill vocabulary, stack-keyword list and stop-word list are data, not
//! logic: the matching code never hardcodes an entry, so the lists can be
//! extended or tested independently.

// === Screening Defaults ===
pub const DEFAULT_MIN_SCORE: f64 = 0.5;
pub const STACK_KEYWORD_BONUS: f64 = 0.05;

// === File Discovery ===
pub const RESUME_EXTENSION: &str = "pdf";

// === Field Sentinels ===
pub const UNKNOWN_NAME: &str = "Unknown";
pub const NOT_FOUND: &str = "Not Found";

// === Report Column Widths ===
pub const EMAIL_WIDTH: usize = 20;
pub const MOBILE_WIDTH: usize = 17;
pub const NAME_WIDTH: usize = 19;
pub const SCORE_WIDTH: usize = 18;

/// Closed vocabulary of recognized technology terms, matched
/// case-insensitively on word boundaries. Matches are reported with the
/// casing given here.
pub const SKILL_VOCABULARY: &[&str] = &[
    "Python",
    "Machine Learning",
    "NLP",
    "AI",
    "Deep Learning",
    "Data Science",
    "SQL",
    "Big Data",
    "Hadoop",
    "Spark",
    "Power BI",
    "Tableau",
    "Data Engineering",
    "AWS",
    "GCP",
    "Azure",
    "Java",
    "R",
    "TensorFlow",
    "PyTorch",
    "Scikit-learn",
    "Keras",
    "Hugging Face",
    "Excel",
    "SAS",
    "Matplotlib",
    "Seaborn",
    "D3.js",
    "MySQL",
    "PostgreSQL",
    "MongoDB",
    "Cassandra",
    "Docker",
    "Kubernetes",
    "Jenkins",
    "Git",
    "Ansible",
    "GenAI",
    "LLMs",
    "Snowflake",
    "HTML5",
    "CSS3",
    "JavaScript",
    "React.js",
    "Node.js",
    "Express.js",
    "Cloudinary",
    "MapBox",
    "Multer",
    "Bootstrap",
    "EJS",
    "RESTful",
    "MERN",
    "MVC",
];

/// Target-stack keywords that earn a fixed additive bonus when present
/// anywhere in the raw resume text (lower-cased substring containment).
/// Overlap with `SKILL_VOCABULARY` is intentional: candidates on this stack
/// are double-counted to bias the ranking toward it.
pub const STACK_KEYWORDS: &[&str] = &[
    "html5",
    "css3",
    "javascript",
    "react.js",
    "node.js",
    "express.js",
    "mongodb",
    "mysql",
    "git",
    "mern",
    "mvc",
    "restful",
    "cloudinary",
    "mapbox",
    "multer",
    "bootstrap",
    "ejs",
];

/// English stop-words removed before building the TF-IDF vector space.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an",
    "and", "any", "are", "as", "at", "be", "because", "been", "before",
    "being", "below", "between", "both", "but", "by", "can", "did", "do",
    "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "him", "his", "how", "i", "if", "in", "into", "is", "it", "its", "just",
    "me", "more", "most", "my", "no", "nor", "not", "now", "of", "off", "on",
    "once", "only", "or", "other", "our", "ours", "out", "over", "own",
    "same", "she", "should", "so", "some", "such", "than", "that", "the",
    "their", "theirs", "them", "then", "there", "these", "they", "this",
    "those", "through", "to", "too", "under", "until", "up", "very", "was",
    "we", "were", "what", "when", "where", "which", "while", "who", "whom",
    "why", "will", "with", "you", "your", "yours",
];

// === Default Job Posting ===
pub const DEFAULT_COMPANY: &str = "InnovateTech Solutions";

pub const DEFAULT_JOB_DESCRIPTION: &str = "\
Full Stack Developer (Entry-Level) at InnovateTech Solutions:
InnovateTech Solutions is seeking a motivated and enthusiastic Full Stack Developer to join our growing team. The ideal candidate will have hands-on experience with modern web development technologies and a passion for creating scalable, responsive applications. You will collaborate with cross-functional teams to design, develop, and deploy innovative web solutions, leveraging both front-end and back-end skills to deliver high-quality projects.

Responsibilities:
- Design and develop user-friendly, responsive web applications using HTML5, CSS3, JavaScript, and React.js.
- Build and maintain robust server-side applications using Node.js and Express.js.
- Manage and optimize databases with MongoDB and MySQL to support application functionality.
- Integrate and utilize version control systems (e.g., Git) for collaborative development.
- Work on full-stack projects following the MERN stack architecture.
- Participate in code reviews, testing, and debugging to ensure high-quality deliverables.
- Continuously learn and adopt new technologies to enhance project outcomes.

Requirements:
- Proficiency in front-end technologies: HTML5, CSS3, JavaScript, and React.js.
- Experience with back-end development using Node.js and Express.js.
- Familiarity with databases: MongoDB and MySQL.
- Hands-on experience with version control tools, particularly Git.
- Understanding of the MERN stack (MongoDB, Express.js, React.js, Node.js).
- Strong problem-solving skills and a proactive approach to learning.
- Ability to work independently and as part of a team.
- Pursuing or completed a degree in Computer Science, Engineering, or a related field (preferred).

Preferred Qualifications:
- Experience with personal or academic projects showcasing full-stack development (e.g., web applications).
- Knowledge of additional tools or APIs relevant to web development such as Cloudinary, MapBox, Multer, Bootstrap, and EJS.
- Demonstrated passion for continuous learning and innovation in technology.
";
