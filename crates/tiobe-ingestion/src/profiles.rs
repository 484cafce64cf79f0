//! Descriptive profiles for well-known languages.

use tiobe_common::{Language, LanguageDetail};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanguageProfile {
    pub description: &'static str,
    pub use_cases: &'static [&'static str],
    pub frameworks: &'static [&'static str],
}

const GENERIC: LanguageProfile = LanguageProfile {
    description: "A popular programming language.",
    use_cases: &["General-purpose programming"],
    frameworks: &["None listed"],
};

/// Profile for `name`, matched case-insensitively. Unknown names get a generic profile.
pub fn profile_for(name: &str) -> LanguageProfile {
    match name.trim().to_lowercase().as_str() {
        "python" => LanguageProfile {
            description: "Python is a high-level, general-purpose language known for its clean, readable syntax.",
            use_cases: &["Data science", "Machine learning", "Web development", "Automation scripts", "Scientific computing"],
            frameworks: &["Django", "Flask", "FastAPI", "PyTorch", "TensorFlow", "Pandas"],
        },
        "c" => LanguageProfile {
            description: "C is a general-purpose procedural language widely used for systems and embedded programming.",
            use_cases: &["Operating systems", "Embedded systems", "Device drivers", "Game engines", "Databases"],
            frameworks: &["Linux Kernel", "SQLite", "Git", "Nginx"],
        },
        "c++" => LanguageProfile {
            description: "C++ extends C with object-oriented programming and is used for high-performance applications.",
            use_cases: &["Game development", "Systems software", "Web browsers", "Databases", "Graphics"],
            frameworks: &["Qt", "Boost", "Unreal Engine", "OpenCV"],
        },
        "java" => LanguageProfile {
            description: "Java is an object-oriented language known for running on any platform with a JVM.",
            use_cases: &["Enterprise applications", "Android development", "Big data", "Cloud computing", "Microservices"],
            frameworks: &["Spring", "Hibernate", "Maven", "Gradle", "Apache Kafka"],
        },
        "c#" => LanguageProfile {
            description: "C# is Microsoft's object-oriented language, primarily used on the .NET platform.",
            use_cases: &["Windows applications", "Game development", "Web services", "Enterprise software", "Cloud applications"],
            frameworks: &[".NET Core", "ASP.NET", "Unity", "Xamarin", "Entity Framework"],
        },
        "javascript" => LanguageProfile {
            description: "JavaScript is the core language of the web, used on both the front end and the back end.",
            use_cases: &["Front-end development", "Back-end development", "Mobile apps", "Desktop apps", "Game development"],
            frameworks: &["React", "Vue.js", "Angular", "Node.js", "Express", "Next.js"],
        },
        "go" => LanguageProfile {
            description: "Go is a language from Google, known for its simplicity and strong concurrency support.",
            use_cases: &["Cloud native", "Microservices", "Network programming", "DevOps tooling", "Blockchain"],
            frameworks: &["Gin", "Echo", "Kubernetes", "Docker", "Prometheus"],
        },
        "rust" => LanguageProfile {
            description: "Rust is a systems programming language focused on safety, concurrency and performance.",
            use_cases: &["Systems programming", "WebAssembly", "Embedded", "Command-line tools", "Blockchain"],
            frameworks: &["Actix", "Rocket", "Tokio", "Axum", "Diesel"],
        },
        "php" => LanguageProfile {
            description: "PHP is a server-side scripting language widely used for web development.",
            use_cases: &["Web development", "CMS platforms", "E-commerce", "API development", "Blogs"],
            frameworks: &["Laravel", "Symfony", "WordPress", "Drupal", "Magento"],
        },
        "r" => LanguageProfile {
            description: "R is a language for statistical computing and graphics.",
            use_cases: &["Statistical analysis", "Data visualization", "Machine learning", "Bioinformatics", "Financial analysis"],
            frameworks: &["ggplot2", "dplyr", "tidyr", "Shiny", "caret"],
        },
        "sql" => LanguageProfile {
            description: "SQL is the standard language for managing relational databases.",
            use_cases: &["Data querying", "Data management", "Reporting", "Data analysis", "ETL"],
            frameworks: &["MySQL", "PostgreSQL", "Oracle", "SQL Server", "SQLite"],
        },
        "kotlin" => LanguageProfile {
            description: "Kotlin is a modern language from JetBrains, fully interoperable with Java.",
            use_cases: &["Android development", "Server-side development", "Cross-platform development", "Web development"],
            frameworks: &["Ktor", "Spring Boot", "Jetpack Compose", "Exposed"],
        },
        "visual basic" => LanguageProfile {
            description: "Visual Basic is Microsoft's event-driven programming language.",
            use_cases: &["Windows applications", "Office automation", "Database applications", "Rapid prototyping"],
            frameworks: &["VB.NET", "VBA", "Visual Studio"],
        },
        "perl" => LanguageProfile {
            description: "Perl is a high-level, general-purpose interpreted language.",
            use_cases: &["Text processing", "System administration", "Web development", "Network programming", "Bioinformatics"],
            frameworks: &["Mojolicious", "Dancer", "Catalyst", "CPAN"],
        },
        "delphi/object pascal" | "delphi" => LanguageProfile {
            description: "Delphi/Object Pascal is an object-oriented language for rapid application development.",
            use_cases: &["Desktop applications", "Database applications", "Cross-platform development", "Embedded systems"],
            frameworks: &["FireMonkey", "VCL", "RAD Studio"],
        },
        "fortran" => LanguageProfile {
            description: "Fortran is one of the oldest high-level languages, used mainly for scientific computing.",
            use_cases: &["Scientific computing", "Numerical analysis", "High-performance computing", "Weather modeling", "Physics simulation"],
            frameworks: &["LAPACK", "BLAS", "OpenMP", "MPI"],
        },
        "matlab" => LanguageProfile {
            description: "MATLAB is a language and environment for numerical computing.",
            use_cases: &["Numerical computing", "Signal processing", "Image processing", "Control systems", "Deep learning"],
            frameworks: &["Simulink", "Image Processing Toolbox", "Deep Learning Toolbox"],
        },
        "ada" => LanguageProfile {
            description: "Ada is a structured, statically typed language for high-integrity systems.",
            use_cases: &["Aerospace", "Defense systems", "Railway systems", "Medical devices", "Embedded systems"],
            frameworks: &["GNAT", "SPARK", "Ada Web Server"],
        },
        "assembly language" | "assembly" => LanguageProfile {
            description: "Assembly language is a low-level language that maps directly to machine code.",
            use_cases: &["Operating systems", "Device drivers", "Embedded systems", "Reverse engineering", "Performance tuning"],
            frameworks: &["NASM", "MASM", "GAS"],
        },
        "scratch" => LanguageProfile {
            description: "Scratch is a visual programming language designed for teaching programming.",
            use_cases: &["Programming education", "Game development", "Animation", "Interactive stories"],
            frameworks: &["Scratch 3.0", "ScratchJr"],
        },
        _ => GENERIC,
    }
}

/// Combine a ranking entry with the profile for the requested name.
pub fn language_detail(requested: &str, lang: &Language) -> LanguageDetail {
    let profile = profile_for(requested);
    LanguageDetail {
        name: lang.name.clone(),
        rank: lang.rank,
        rating: lang.rating.clone(),
        description: profile.description.to_string(),
        use_cases: profile.use_cases.iter().map(|s| s.to_string()).collect(),
        frameworks: profile.frameworks.iter().map(|s| s.to_string()).collect(),
    }
}
