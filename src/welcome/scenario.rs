use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Metadata of a scenario that can be welcomed once loading ends
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub title: String,
    pub content: String,
}

impl Scenario {
    pub fn new(name: &str, title: &str, content: &str) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DisplayText {
    pub title: String,
    pub content: String,
}

// name, title, content
const BUILTIN: &[(&str, &str, &str)] = &[
    (
        "A propos",
        "A propos de Medianet",
        "Nous sommes une agence Digitalement transformée Grâce à son expérience de plus de 20 ans dans le Web, le mobile et le marketing digital, MEDIANET est un accompagnateur dans la transformation digitale 360°",
    ),
    (
        "Culture & Valeurs",
        "Culture & Valeurs",
        "Confiance-Transparence-Communication-Partage",
    ),
    (
        "MEDIANET dans le monde",
        "MEDIANET dans le monde",
        "Aujourd’hui, MEDIANET est présente sur quatre continents et ne cesse d'accroître son activité à l’échelle internationaleLe Canada, les USA, la France, l'Angleterre, l'Allemagne, l'Italie, la Tunisie, l'Algérie, le Maroc, la Mauritanie, le Sénégal, la Côte d'Ivoire, le Burkina Faso, le Bénin, le Mali, la Guinée, le Gabon, le Congo, le Burundi, le Tchad, la Libye, l'Egypte, l'Arabie Saoudite, le Yémen et les UAE",
    ),
    (
        "Innovation",
        "MEDIANET Labs",
        "Un laboratoire pour développer des projets novateurs à travers l'innovation collective MEDIANET Labs mise sur des Medianautes experts, créatifs et innovants",
    ),
    (
        "Contact",
        "Contact",
        "Avenue Habib Bourguiba, 10 Décembre\nImmeuble Essaadi Tour C-D Mezzanine Menzah 4, 1004 Tunis\nTéléphone : +216 28 910 608\nInformation : info@medianet.com.tn\nCommercial : sales@medianet.com.tn\nRecrutement : recrutement@medianet.com.tn",
    ),
];

static BUILTIN_TEXTS: Lazy<ScenarioTexts> = Lazy::new(|| {
    BUILTIN
        .iter()
        .fold(ScenarioTexts::default(), |texts, (name, title, content)| {
            texts.with_override(name, title, content)
        })
});

/// Title and content overrides keyed by scenario name.
///
/// Names are compared without surrounding whitespace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioTexts {
    overrides: FxHashMap<String, DisplayText>,
}

impl ScenarioTexts {
    /// Overrides shipped with the crate
    pub fn builtin() -> &'static ScenarioTexts {
        &BUILTIN_TEXTS
    }

    /// Parses `{ "<name>": { "title": "...", "content": "..." } }`
    pub fn from_json(json: &str) -> Result<Self, String> {
        let parsed: FxHashMap<String, DisplayText> =
            serde_json::from_str(json).map_err(|e| format!("Invalid scenario texts: {e}"))?;

        let overrides = parsed
            .into_iter()
            .map(|(name, text)| (name.trim().to_string(), text))
            .collect();
        Ok(Self { overrides })
    }

    pub fn with_override(mut self, name: &str, title: &str, content: &str) -> Self {
        self.overrides.insert(
            name.trim().to_string(),
            DisplayText {
                title: title.to_string(),
                content: content.to_string(),
            },
        );
        self
    }

    /// Adds the overrides of `other`, replacing the ones with the same name
    pub fn merge(mut self, other: ScenarioTexts) -> Self {
        self.overrides.extend(other.overrides);
        self
    }

    pub fn get(&self, name: &str) -> Option<&DisplayText> {
        self.overrides.get(name.trim())
    }

    /// Text to show for `scenario`, its own title and content if there is no override
    pub fn resolve(&self, scenario: &Scenario) -> DisplayText {
        self.get(&scenario.name)
            .cloned()
            .unwrap_or_else(|| DisplayText {
                title: scenario.title.clone(),
                content: scenario.content.clone(),
            })
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}
