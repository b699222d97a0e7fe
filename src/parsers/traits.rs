use crate::errors::CategorizeResult;

pub trait Parser {
    type Output;

    fn parse(content: &str) -> CategorizeResult<Vec<Self::Output>>;
}
