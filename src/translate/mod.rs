/*! Translation boundary.

The translator is an opaque `string -> string` collaborator: it may
drop, duplicate or relocate any substring of its input, inserted
delimiters included. Nothing downstream assumes anything about its
output beyond it being text.

!*/
mod remote;

pub use remote::RemoteTranslator;

use crate::error::Error;

pub trait Translate {
    fn translate(&self, text: &str) -> Result<String, Error>;
}

/// Closure-backed translator, handy for stubbing the service out in
/// tests.
pub struct FnTranslator<F>(pub F)
where
    F: Fn(&str) -> Result<String, Error>;

impl<F> Translate for FnTranslator<F>
where
    F: Fn(&str) -> Result<String, Error>,
{
    fn translate(&self, text: &str) -> Result<String, Error> {
        (self.0)(text)
    }
}
