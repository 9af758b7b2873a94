use crate::cursor::Cursor;
use crate::error::{Combinator, Failure, FailureKind};
use crate::parser::{Outcome, Parser};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always succeeds without consuming input and returns a clone of its value
#[derive(Debug, Clone)]
pub struct Succeed<T> {
    value: T,
}

impl<T> Succeed<T> {
    pub fn new(value: T) -> Self {
        Succeed { value }
    }
}

impl<'code, T> Parser<'code> for Succeed<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        Ok((self.value.clone(), cursor))
    }
}

/// Convenience function to create a Succeed parser
pub fn succeed<T>(value: T) -> Succeed<T>
where
    T: Clone,
{
    Succeed::new(value)
}

/// Parser that always fails with the given message
///
/// Mostly useful as the rejecting branch of a [`crate::bind::bind`]
/// continuation.
#[derive(Debug, Clone)]
pub struct Fail<T> {
    message: Cow<'static, str>,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Fail<T> {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Fail {
            message: message.into(),
            _phantom: PhantomData,
        }
    }
}

impl<'code, T> Parser<'code> for Fail<T> {
    type Output = T;

    fn parse(&self, _cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        Err(Failure::new(
            FailureKind::Rejected,
            self.message.clone(),
            Combinator::Fail,
        ))
    }
}

pub fn fail<T>(message: impl Into<Cow<'static, str>>) -> Fail<T> {
    Fail::new(message)
}
