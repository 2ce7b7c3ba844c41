//! Request bodies for `POST /api/v1/messages/send`.

use serde::Serialize;

pub const DEFAULT_LANGUAGE_CODE: &str = "en_US";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Text,
    Template,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendRequest {
    pub phone: String,
    pub message_type: MessageType,
    pub data: MessageData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MessageData {
    Text(TextData),
    Template(TemplateData),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextData {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateData {
    pub name: String,
    pub language_code: String,
    /// Absent, not empty, when the template has no parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<TemplateComponent>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Body,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateComponent {
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub parameters: Vec<TemplateParameter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateParameter {
    #[serde(rename = "type")]
    pub parameter_type: ParameterType,
    pub text: String,
}

/// A pre-approved template and the values for its `{{1}}, {{2}}, ...` placeholders.
///
/// Parameter order is positional and therefore significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMessage {
    name: String,
    params: Vec<String>,
    language_code: String,
}

impl TemplateMessage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
        }
    }

    pub fn with_params<I, T>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        self.params = params.into_iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_param(mut self, param: impl ToString) -> Self {
        self.params.push(param.to_string());
        self
    }

    pub fn with_language(mut self, language_code: impl Into<String>) -> Self {
        self.language_code = language_code.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    fn components(&self) -> Option<Vec<TemplateComponent>> {
        if self.params.is_empty() {
            return None;
        }

        let parameters = self
            .params
            .iter()
            .map(|value| TemplateParameter {
                parameter_type: ParameterType::Text,
                text: value.clone(),
            })
            .collect();

        Some(vec![TemplateComponent {
            component_type: ComponentType::Body,
            parameters,
        }])
    }
}

impl SendRequest {
    pub fn text(phone: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            message_type: MessageType::Text,
            data: MessageData::Text(TextData { text: body.into() }),
        }
    }

    pub fn template(phone: impl Into<String>, template: &TemplateMessage) -> Self {
        Self {
            phone: phone.into(),
            message_type: MessageType::Template,
            data: MessageData::Template(TemplateData {
                name: template.name.clone(),
                language_code: template.language_code.clone(),
                components: template.components(),
            }),
        }
    }
}
