pub mod markup;
pub mod question;
pub mod subject;
