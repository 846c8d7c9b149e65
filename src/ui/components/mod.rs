pub mod form_editor;
pub mod search_bar;
