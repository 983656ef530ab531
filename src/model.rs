use crate::visuals::Visual;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    NumericAnalogies,
    NumericSeries,
    NumericPuzzles,
    FigureMatrices,
    FigureClassification,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::NumericAnalogies,
        Category::NumericSeries,
        Category::NumericPuzzles,
        Category::FigureMatrices,
        Category::FigureClassification,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::NumericAnalogies => "Analogías numéricas",
            Category::NumericSeries => "Series numéricas",
            Category::NumericPuzzles => "Rompecabezas numéricos",
            Category::FigureMatrices => "Matrices de figuras",
            Category::FigureClassification => "Clasificación de figuras",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Media",
            Difficulty::Hard => "Difícil",
        }
    }
}

/// Filtro de selección: `Mixed` no restringe nada.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Filter<T> {
    Mixed,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::Mixed
    }
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::Mixed => true,
            Filter::Only(wanted) => wanted == value,
        }
    }
}

impl Filter<Category> {
    /// `Mixed` seguido de cada categoría concreta.
    pub fn all_choices() -> Vec<Filter<Category>> {
        std::iter::once(Filter::Mixed)
            .chain(Category::ALL.into_iter().map(Filter::Only))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::Mixed => "Todas (mixto)",
            Filter::Only(c) => c.label(),
        }
    }
}

impl Filter<Difficulty> {
    pub fn all_choices() -> Vec<Filter<Difficulty>> {
        std::iter::once(Filter::Mixed)
            .chain(Difficulty::ALL.into_iter().map(Filter::Only))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::Mixed => "Todas (mixto)",
            Filter::Only(d) => d.label(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuestionOption {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub visual: Option<Visual>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub id: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub prompt: String, // Enunciado
    #[serde(default)]
    pub visual: Option<Visual>,
    pub options: Vec<QuestionOption>,
    pub correct_answer_id: String,
    pub explanation: String,
    #[serde(default)]
    pub hint: Option<String>,
}

impl Question {
    pub fn option(&self, option_id: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    pub fn correct_option(&self) -> Option<&QuestionOption> {
        self.option(&self.correct_answer_id)
    }

    pub fn is_correct(&self, option_id: &str) -> bool {
        self.correct_answer_id == option_id
    }

    /// Markup SVG generado a partir del descriptor visual, si lo hay
    pub fn visual_markup(&self) -> Option<String> {
        self.visual.as_ref().map(Visual::markup)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Welcome,
    Setup,
    Quiz,
    Results,
    History,
}
