//! Row, cell and column descriptions crossing the caller boundary.
//!
//! These shapes mirror the JSON the dashboard backend produces, so they
//! all derive serde. Decorations are a closed set of optional fields,
//! populated through builders; absent lists deserialize as empty.

use serde::{Deserialize, Serialize};

/// Value kind of a column, used by the sort comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    #[default]
    #[serde(rename = "string")]
    Text,
    Number,
    Bool,
}

/// Column metadata, index-aligned with each row's `cells`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub label: String,
    #[serde(default)]
    pub sortable: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default, rename = "type")]
    pub kind: ColumnKind,
}

impl Header {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sortable: false,
            hidden: false,
            kind: ColumnKind::Text,
        }
    }

    /// Make the column sortable. Sortable headers respond to clicks by
    /// toggling the sort order.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Hide the column from the projection. Hidden columns still take a
    /// slot in each row's `cells` (the positional contract is unchanged).
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn kind(mut self, kind: ColumnKind) -> Self {
        self.kind = kind;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSpec {
    pub src: String,
    #[serde(default)]
    pub style: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonSpec {
    #[serde(default)]
    pub id: Option<String>,
    pub label: String,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

impl ButtonSpec {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            class: None,
            style: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeSpec {
    #[serde(default)]
    pub id: Option<String>,
    pub label: String,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

impl BadgeSpec {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            class: None,
            style: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSpec {
    #[serde(default)]
    pub id: Option<String>,
    /// Display text; the href stands in when absent.
    #[serde(default)]
    pub label: Option<String>,
    pub href: String,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

impl LinkSpec {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            id: None,
            label: None,
            href: href.into(),
            class: None,
            style: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Label shown to the user.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.href)
    }
}

/// One cell of a row: optional text plus optional decorations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub icon: Option<IconSpec>,
    #[serde(default)]
    pub buttons: Vec<ButtonSpec>,
    #[serde(default)]
    pub badges: Vec<BadgeSpec>,
    #[serde(default)]
    pub links: Vec<LinkSpec>,
    /// Marks this as a checkbox cell; the glyph state comes from the
    /// table's checked set, never from the cell itself.
    #[serde(default)]
    pub checkbox: bool,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn checkbox() -> Self {
        Self {
            checkbox: true,
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn icon(mut self, src: impl Into<String>) -> Self {
        self.icon = Some(IconSpec {
            src: src.into(),
            style: None,
        });
        self
    }

    pub fn button(mut self, button: ButtonSpec) -> Self {
        self.buttons.push(button);
        self
    }

    pub fn badge(mut self, badge: BadgeSpec) -> Self {
        self.badges.push(badge);
        self
    }

    pub fn link(mut self, link: LinkSpec) -> Self {
        self.links.push(link);
        self
    }

    /// Text rendered for this cell; `None` renders as the empty string.
    pub fn display_text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Everything searchable in this cell.
    fn collect_search_text(&self, out: &mut String) {
        let mut push = |s: &str| {
            if !s.is_empty() {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(s);
            }
        };
        push(self.display_text());
        for button in &self.buttons {
            push(&button.label);
        }
        for badge in &self.badges {
            push(&badge.label);
        }
        for link in &self.links {
            push(link.display_label());
        }
    }
}

/// One table row: a stable identifier plus positional cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: String,
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(id: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            id: id.into(),
            cells,
        }
    }

    /// Concatenated visible text of all cells, used by the search filter.
    pub fn search_text(&self) -> String {
        let mut out = String::new();
        for cell in &self.cells {
            cell.collect_search_text(&mut out);
        }
        out
    }
}
