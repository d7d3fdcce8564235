//! Template-driven text rendering of the board.
//!
//! The board is projected into plain view structs and fed to a `minijinja`
//! template. Empty containers show the "No Task Available" placeholder and
//! tasks without subtasks show no progress counter.

use minijinja::Environment;
use serde::Serialize;
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tracing::warn;

use crate::board::{
    domain::{ContainerKey, SubtaskProgress, Task, TaskBoard},
    ports::BoardRenderer,
};

/// Default board template.
pub const BOARD_TEMPLATE: &str = "\
{% for column in columns %}== {{ column.title }} ({{ column.cards|length }})
{% for card in column.cards %}- [{{ card.priority }}] {{ card.title }} ({{ card.id }})\
{% if card.category %} <{{ card.category }}>{% endif %}\
{% if card.progress %} {{ card.progress.completed }}/{{ card.progress.total }} Subtasks \
{{ card.progress.percent }}%{% endif %}\
{% if card.initials %} @{{ card.initials|join(\",\") }}{% endif %}
{% else %}  No Task Available
{% endfor %}{% endfor %}";

const TEMPLATE_NAME: &str = "board";

/// Errors raised while rendering the board template.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to render board template: {0}")]
pub struct RenderError(pub String);

#[derive(Debug, Serialize)]
struct BoardView {
    columns: Vec<ColumnView>,
}

#[derive(Debug, Serialize)]
struct ColumnView {
    key: &'static str,
    title: &'static str,
    cards: Vec<CardView>,
}

#[derive(Debug, Serialize)]
struct CardView {
    id: String,
    title: String,
    category: String,
    priority: &'static str,
    progress: Option<ProgressView>,
    initials: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ProgressView {
    completed: usize,
    total: usize,
    percent: usize,
}

impl CardView {
    fn from_task(task: &Task) -> Self {
        let progress = SubtaskProgress::of(task);
        Self {
            id: task.id().to_string(),
            title: task.title().to_owned(),
            category: task.category().to_owned(),
            priority: task.priority().as_str(),
            progress: progress.is_visible().then(|| ProgressView {
                completed: progress.completed,
                total: progress.total,
                percent: progress.percent(),
            }),
            initials: task.assignees().iter().map(|assignee| assignee.initials()).collect(),
        }
    }
}

impl BoardView {
    fn from_board(board: &TaskBoard) -> Self {
        let columns = ContainerKey::ALL
            .into_iter()
            .map(|key| ColumnView {
                key: key.as_str(),
                title: key.title(),
                cards: board.tasks_in(key).map(CardView::from_task).collect(),
            })
            .collect();
        Self { columns }
    }
}

/// Renderer producing a text view of the board.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    template: String,
    last_output: Arc<RwLock<Option<String>>>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a renderer using [`BOARD_TEMPLATE`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_template(BOARD_TEMPLATE)
    }

    /// Creates a renderer using a custom template.
    #[must_use]
    pub fn with_template(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            last_output: Arc::new(RwLock::new(None)),
        }
    }

    /// Renders the board to text.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the template cannot be compiled or
    /// evaluated.
    pub fn render(&self, board: &TaskBoard) -> Result<String, RenderError> {
        let mut environment = Environment::new();
        environment
            .add_template(TEMPLATE_NAME, &self.template)
            .map_err(|err| RenderError(err.to_string()))?;
        let template = environment
            .get_template(TEMPLATE_NAME)
            .map_err(|err| RenderError(err.to_string()))?;
        template
            .render(BoardView::from_board(board))
            .map_err(|err| RenderError(err.to_string()))
    }

    /// Returns the output of the most recent successful refresh.
    #[must_use]
    pub fn last_output(&self) -> Option<String> {
        self.last_output.read().ok().and_then(|output| output.clone())
    }
}

impl BoardRenderer for TemplateRenderer {
    fn refresh(&self, board: &TaskBoard) {
        match self.render(board) {
            Ok(output) => {
                if let Ok(mut last) = self.last_output.write() {
                    *last = Some(output);
                }
            }
            Err(err) => warn!(error = %err, "board refresh failed"),
        }
    }
}
