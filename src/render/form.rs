// src/render/form.rs
use serde::Deserialize;

use crate::models::player::NewPlayer;
use crate::utils::escape_html;

pub const FORM_CONTAINER_ID: &str = "new-player-form";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    /// Name of the submitted form value.
    pub name: &'static str,
    pub element_id: &'static str,
    pub placeholder: &'static str,
}

const NAME_FIELD: FormField = FormField {
    name: "name",
    element_id: "player-name",
    placeholder: "Name",
};
const BREED_FIELD: FormField = FormField {
    name: "breed",
    element_id: "player-breed",
    placeholder: "Breed",
};
const STATUS_FIELD: FormField = FormField {
    name: "status",
    element_id: "player-status",
    placeholder: "Status",
};
const IMAGE_FIELD: FormField = FormField {
    name: "imageUrl",
    element_id: "player-image",
    placeholder: "Image URL",
};

#[derive(Debug)]
pub struct FormContainer {
    pub element_id: &'static str,
    fields: Vec<FormField>,
    rendered: bool,
}

impl Default for FormContainer {
    fn default() -> Self {
        Self {
            element_id: FORM_CONTAINER_ID,
            fields: Vec::new(),
            rendered: false,
        }
    }
}

impl FormContainer {
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    pub fn to_html(&self) -> String {
        let mut html = format!("<div id=\"{}\">\n", self.element_id);
        if self.is_rendered() {
            html.push_str("  <h2>Add New Player</h2>\n");
            html.push_str("  <h5>The new player will be the last in the lineup</h5>\n");
            html.push_str("  <form method=\"post\" action=\"/players\">\n");
            for field in self.fields() {
                html.push_str(&format!(
                    concat!(
                        "    <label for=\"{id}\">{label}</label>\n",
                        "    <input type=\"text\" id=\"{id}\" name=\"{name}\" ",
                        "placeholder=\"{label}\" />\n"
                    ),
                    id = field.element_id,
                    name = field.name,
                    label = escape_html(field.placeholder),
                ));
            }
            html.push_str("    <button id=\"add-player-btn\">Add Player</button>\n");
            html.push_str("  </form>\n");
        }
        html.push_str("</div>\n");
        html
    }
}

/// Installs the add-player inputs. The status input is optional; without it new
/// players get the configured default status.
pub fn render_new_player_form(container: &mut FormContainer, include_status: bool) {
    container.fields = if include_status {
        vec![NAME_FIELD, BREED_FIELD, STATUS_FIELD, IMAGE_FIELD]
    } else {
        vec![NAME_FIELD, BREED_FIELD, IMAGE_FIELD]
    };
    container.rendered = true;
}

/// Values posted by the add-player form, taken as-is.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub breed: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub status: Option<String>,
}

pub fn build_new_player(
    values: FormValues,
    include_status: bool,
    default_status: &str,
) -> NewPlayer {
    let status = match values.status {
        Some(status) if include_status => status,
        _ => default_status.to_string(),
    };
    NewPlayer {
        name: values.name,
        breed: values.breed,
        image_url: values.image_url,
        status,
    }
}
