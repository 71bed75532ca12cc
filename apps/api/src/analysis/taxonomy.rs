//! Keyword Taxonomy: static skill vocabulary, alias table and JD stopwords.
//!
//! Pure data. Extending the vocabulary means editing these tables only; the
//! extractor picks changes up without modification.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Skill vocabulary scanned by the phrase pass.
///
/// A few entries are informal spellings (`k8s`, `golang`, `postgres`) kept so
/// the phrase pass still finds them; they are reported through `SKILL_ALIASES`.
pub const SKILL_TERMS: &[&str] = &[
    // Languages
    "javascript", "typescript", "python", "java", "c++", "c#", "ruby", "go", "golang", "php",
    "swift", "kotlin", "rust", "scala", "perl", "r", "matlab", "assembly", "bash", "shell",
    "powershell",
    // Markup & data formats
    "html", "css", "sql", "nosql", "graphql", "xml", "json", "yaml", "markdown",
    // Frontend
    "react", "reactjs", "angular", "vue", "vuejs", "svelte", "next.js", "nextjs", "nuxt.js",
    "nuxtjs", "ember", "backbone", "jquery", "bootstrap", "tailwind", "sass", "less",
    "material", "chakra",
    // Backend frameworks
    "node", "nodejs", "express", "nest", "nestjs", "django", "flask", "fastapi", "rails",
    "spring", "asp.net", ".net", "laravel", "symfony",
    // Cloud & hosting
    "aws", "azure", "gcp", "google cloud", "firebase", "supabase", "heroku", "netlify",
    "vercel", "digitalocean",
    // DevOps & infrastructure
    "docker", "kubernetes", "k8s", "jenkins", "circleci", "github actions", "gitlab ci",
    "travis", "terraform", "ansible", "chef", "puppet",
    // Datastores
    "mysql", "postgresql", "postgres", "mongodb", "mongo", "redis", "elasticsearch",
    "cassandra", "dynamodb", "sqlite", "mariadb", "oracle", "sql server",
    // Version control
    "git", "svn", "mercurial", "bitbucket", "gitlab", "github", "version control",
    // Collaboration tools
    "jira", "confluence", "trello", "asana", "slack", "discord", "zoom", "teams",
    // Platforms
    "linux", "unix", "windows", "macos", "android", "ios",
    // Practices & architecture
    "agile", "scrum", "kanban", "waterfall", "devops", "ci/cd", "tdd", "bdd", "oop",
    "functional programming", "mvc", "mvvm", "microservices", "serverless", "rest", "soap",
    "grpc", "websocket", "sdlc", "service oriented architecture",
    // Data & ML
    "machine learning", "deep learning", "ai", "artificial intelligence", "data science",
    "big data", "hadoop", "spark", "kafka", "pandas", "numpy", "scikit-learn", "tensorflow",
    "pytorch", "opencv",
    // Web3
    "blockchain", "crypto", "smart contracts", "solidity", "ethereum", "bitcoin",
    // Security
    "cybersecurity", "penetration testing", "ethical hacking", "cryptography",
    "network security",
    // Design
    "adobe", "photoshop", "illustrator", "xd", "figma", "sketch", "invision", "zeplin",
    "user interface", "user experience",
    // Engineering disciplines
    "databases", "database", "relational database", "rdbms", "system design",
    "distributed systems", "software engineering", "computer science", "web development",
    "mobile development", "full stack", "frontend", "backend", "rest api", "api design",
    "unit testing", "integration testing", "e2e testing", "automated testing",
    // Soft skills
    "communication skills", "teamwork", "leadership", "mentoring", "code review",
    "debugging", "troubleshooting",
];

/// Informal spelling → canonical term. Keys are lowercase.
pub const SKILL_ALIASES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("reactjs", "react"),
    ("react.js", "react"),
    ("node.js", "node"),
    ("nodejs", "node"),
    ("vue.js", "vue"),
    ("vuejs", "vue"),
    ("next.js", "nextjs"),
    ("golang", "go"),
    ("postgres", "postgresql"),
    ("mongo", "mongodb"),
    ("k8s", "kubernetes"),
    ("ui", "user interface"),
    ("ux", "user experience"),
    ("cicd", "ci/cd"),
    ("ci-cd", "ci/cd"),
    ("cpp", "c++"),
    ("csharp", "c#"),
    ("dotnet", ".net"),
    ("ml", "machine learning"),
    ("ai", "artificial intelligence"),
];

/// Job-description filler that must never surface as a keyword.
pub const IGNORED_TERMS: &[&str] = &[
    "and", "the", "of", "in", "to", "a", "is", "for", "with", "on", "as", "by", "an", "are",
    "be", "or", "it", "at", "from", "that", "this", "which", "we", "you", "your", "can", "will",
    "have", "not", "but", "all", "looking", "seeking", "responsible", "qualifications",
    "degree", "bachelors", "masters", "participate", "participating", "collaborate",
    "collaborating", "review", "reviews", "documentation", "documenting", "best", "practices",
    "familiarity", "understanding", "hands-on", "proven", "track", "record", "build",
    "building", "create", "creating", "new", "existing", "features", "functionality", "issues",
    "bugs", "root", "cause", "analysis", "performance", "scalability", "reliable", "efficient",
    "robust", "secure", "high", "quality", "deliver", "delivering", "ensure", "ensuring",
    "adhere", "adhering", "standards", "specifications", "user", "users", "customer",
    "customers", "client", "clients", "needs", "stakeholders", "written", "verbal",
    "interpersonal", "problem-solving", "analytical", "detail-oriented", "self-motivated",
    "independent", "team-player", "monitor", "monitoring", "optimize", "optimizing", "improve",
    "improving", "enhance", "enhancing", "platform", "platforms", "adopt", "using", "use",
    "utilize", "consume",
];

static ALIAS_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
static CANONICAL_TERMS: OnceLock<HashSet<&'static str>> = OnceLock::new();
static STOPWORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn alias_map() -> &'static HashMap<&'static str, &'static str> {
    ALIAS_MAP.get_or_init(|| SKILL_ALIASES.iter().copied().collect())
}

/// Maps an already-lowercased spelling to its canonical form.
/// Unknown spellings are returned unchanged.
pub fn canonicalize(term: &str) -> &str {
    alias_map().get(term).copied().unwrap_or(term)
}

/// The set of canonical spellings reachable from the vocabulary.
pub fn canonical_terms() -> &'static HashSet<&'static str> {
    CANONICAL_TERMS.get_or_init(|| {
        SKILL_TERMS
            .iter()
            .map(|&term| alias_map().get(term).copied().unwrap_or(term))
            .collect()
    })
}

pub fn is_canonical(term: &str) -> bool {
    canonical_terms().contains(term)
}

pub fn is_stopword(term: &str) -> bool {
    STOPWORDS
        .get_or_init(|| IGNORED_TERMS.iter().copied().collect())
        .contains(term)
}
