pub mod article;
pub mod note;

pub use article::{Article, ArticleFilter, ArticleWithNote, NewArticle};
pub use note::{NewNote, Note, NoteForm, NotePayload};
