use crate::Mark;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// A specialized `Result` type where the error is hard-wired to [`Error`].
///
/// [`Error`]: struct.Error.html
pub type YamlResult<T> = Result<T, Error>;
pub type ScanResult = Result<(), Error>;

/// The layer of the pipeline that gave up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Allocation failure.
    Memory,
    /// The byte source failed, or the bytes could not be decoded.
    Reader,
    /// Lexical violation.
    Scanner,
    /// Grammar violation.
    Parser,
    /// Reserved for the serializing side.
    Writer,
    /// Reserved for the serializing side.
    Emitter,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Memory => "memory",
            ErrorKind::Reader => "reader",
            ErrorKind::Scanner => "scanner",
            ErrorKind::Parser => "parser",
            ErrorKind::Writer => "writer",
            ErrorKind::Emitter => "emitter",
        };
        f.write_str(name)
    }
}

/// Diagnostic record returned by every stage of the pipeline.
///
/// `problem_mark` points at the offending character or token. `context_mark`, when present,
/// points at the start of the construct that was being processed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} error: {}", render(.context, .context_mark, .problem, .problem_mark))]
pub struct Error {
    pub kind: ErrorKind,
    pub context: Option<Cow<'static, str>>,
    pub context_mark: Option<Mark>,
    pub problem: Cow<'static, str>,
    pub problem_mark: Mark,
}

fn render(
    context: &Option<Cow<'static, str>>,
    context_mark: &Option<Mark>,
    problem: &Cow<'static, str>,
    problem_mark: &Mark,
) -> String {
    match (context, context_mark) {
        (Some(context), Some(mark)) if mark != problem_mark => {
            format!("{context} at {mark}, {problem} at {problem_mark}")
        }
        (Some(context), _) => format!("{context}, {problem} at {problem_mark}"),
        (None, _) => format!("{problem} at {problem_mark}"),
    }
}

impl Error {
    pub fn new(
        kind: ErrorKind,
        context: Option<&'static str>,
        context_mark: Option<Mark>,
        problem: impl Into<Cow<'static, str>>,
        problem_mark: Mark,
    ) -> Self {
        Error {
            kind,
            context: context.map(Cow::Borrowed),
            context_mark,
            problem: problem.into(),
            problem_mark,
        }
    }

    pub fn memory(problem: impl Into<Cow<'static, str>>, mark: Mark) -> Self {
        Error::new(ErrorKind::Memory, None, None, problem, mark)
    }

    /// Reader errors carry no context; `mark.offset` is the raw offset of the offending byte.
    pub fn reader(problem: impl Into<Cow<'static, str>>, mark: Mark) -> Self {
        Error::new(ErrorKind::Reader, None, None, problem, mark)
    }

    pub fn scanner(
        context: &'static str,
        context_mark: Mark,
        problem: impl Into<Cow<'static, str>>,
        problem_mark: Mark,
    ) -> Self {
        Error::new(
            ErrorKind::Scanner,
            Some(context),
            Some(context_mark),
            problem,
            problem_mark,
        )
    }

    pub fn parser(
        context: Option<&'static str>,
        context_mark: Option<Mark>,
        problem: impl Into<Cow<'static, str>>,
        problem_mark: Mark,
    ) -> Self {
        Error::new(ErrorKind::Parser, context, context_mark, problem, problem_mark)
    }
}
