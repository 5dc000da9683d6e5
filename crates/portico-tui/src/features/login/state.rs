use crate::common::TextField;

/// Input field with focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Username,
    Password,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Username => Field::Password,
            Field::Password => Field::Username,
        }
    }
}

/// Login form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub username: TextField,
    pub password: TextField,
    pub focus: Field,
    /// Password shown in clear text instead of masked.
    pub reveal_password: bool,
    /// Message shown under the fields (validation or rejected login).
    pub error: Option<String>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            username: TextField::default(),
            password: TextField::default(),
            focus: Field::Username,
            reveal_password: false,
            error: None,
        }
    }
}

impl LoginForm {
    pub fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
        }
    }
}
