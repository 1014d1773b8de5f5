/// A browsable topic that maps to several search terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub key: &'static str,
    pub label: &'static str,
    pub terms: &'static [&'static str],
    /// Also scrape the specialized (security) catalog.
    pub includes_specialized: bool,
}

/// Terms searched on the general catalog for security courses.
pub const SECURITY_TERMS: &[&str] = &["pentest", "ethical hacking"];

const CATEGORIES: &[Category] = &[
    Category {
        key: "programacao",
        label: "Programação",
        terms: &[
            "programação",
            "python",
            "javascript",
            "java",
            "desenvolvimento web",
        ],
        includes_specialized: false,
    },
    Category {
        key: "redes",
        label: "Redes e Infraestrutura",
        terms: &[
            "redes de computadores",
            "ccna",
            "infraestrutura ti",
            "mikrotik",
        ],
        includes_specialized: false,
    },
    Category {
        key: "cloud",
        label: "Cloud Computing",
        terms: &["aws", "azure", "google cloud", "cloud computing"],
        includes_specialized: false,
    },
    Category {
        key: "dados",
        label: "Banco de Dados",
        terms: &["sql", "banco de dados", "nosql", "mongodb", "postgresql"],
        includes_specialized: false,
    },
    Category {
        key: "ciencia_dados",
        label: "Ciência de Dados",
        terms: &[
            "ciencia de dados",
            "machine learning",
            "inteligencia artificial",
            "deep learning",
        ],
        includes_specialized: false,
    },
    Category {
        key: "devops",
        label: "DevOps",
        terms: &["devops", "docker", "kubernetes", "ci/cd", "integração contínua"],
        includes_specialized: false,
    },
    Category {
        key: "seguranca",
        label: "Segurança da Informação",
        terms: SECURITY_TERMS,
        includes_specialized: true,
    },
];

impl Category {
    pub fn builtin() -> &'static [Category] {
        CATEGORIES
    }

    pub fn find(key: &str) -> Option<&'static Category> {
        CATEGORIES.iter().find(|category| category.key == key)
    }
}
