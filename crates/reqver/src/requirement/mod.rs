//! Version requirements
//!
//! A requirement is a sequence of clauses such as `>= 1.0.0 and < 2.0.0`.
//! Clauses are joined with ` and ` / ` or ` and evaluated strictly left to
//! right, without operator precedence.

mod bound;
mod lexer;
mod operator;

use std::fmt;
use std::str::FromStr;

use log::{trace, warn};

use crate::error::InvalidRequirementError;
use crate::matcher::{self, MatchOptions, Matchable};
use crate::version::{write_pre, PreId, Version};
use crate::version_parser::{parse_version, VersionParts};

pub(crate) use bound::PessimisticBounds;
pub use lexer::Deprecation;
pub use operator::{Combinator, Operator};

use lexer::{lex, Token};

/// A validated version operand of a clause.
///
/// `patch` is `None` only for a partial `~>` operand such as `~> 2.1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Operand {
    major: u64,
    minor: u64,
    patch: Option<u64>,
    pre: Vec<PreId>,
    build: Option<String>,
}

impl Operand {
    pub(crate) fn from_parts(parts: VersionParts) -> Self {
        Operand {
            major: parts.major,
            minor: parts.minor,
            patch: parts.patch,
            pre: parts.pre,
            build: parts.build,
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> Option<u64> {
        self.patch
    }

    pub fn pre(&self) -> &[PreId] {
        &self.pre
    }

    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(patch) = self.patch {
            write!(f, ".{}", patch)?;
        }
        write_pre(f, &self.pre)?;
        if let Some(ref build) = self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

/// One `operator operand` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    operator: Operator,
    operand: Operand,
}

impl Clause {
    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operand(&self) -> &Operand {
        &self.operand
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator, self.operand)
    }
}

/// A parsed requirement, ready to be matched against any number of versions.
///
/// Displays as the exact source string it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    source: String,
    first: Clause,
    rest: Vec<(Combinator, Clause)>,
    deprecations: Vec<Deprecation>,
}

impl Requirement {
    /// Parse a requirement string
    pub fn parse(source: &str) -> Result<Self, InvalidRequirementError> {
        let lexed = lex(source);
        trace!("lexed requirement {:?}: {:?}", source, lexed.tokens);

        let mut tokens = lexed.tokens.into_iter();
        let error = || InvalidRequirementError::new(source);

        let first = parse_clause(&mut tokens).ok_or_else(error)?;
        let mut rest = Vec::new();
        while let Some(token) = tokens.next() {
            let Token::Combinator(combinator) = token else {
                return Err(error());
            };
            let clause = parse_clause(&mut tokens).ok_or_else(error)?;
            rest.push((combinator, clause));
        }

        for deprecation in &lexed.deprecations {
            warn!("{} (in requirement {:?})", deprecation, source);
        }

        Ok(Requirement {
            source: source.to_string(),
            first,
            rest,
            deprecations: lexed.deprecations,
        })
    }

    /// Parse a requirement string, panicking on invalid input.
    ///
    /// # Panics
    ///
    /// Panics with the [`InvalidRequirementError`] message if `source` is not a valid requirement.
    pub fn must_parse(source: &str) -> Self {
        match Self::parse(source) {
            Ok(requirement) => requirement,
            Err(err) => panic!("{}", err),
        }
    }

    /// Check if a requirement string is valid
    pub fn is_valid(source: &str) -> bool {
        Self::parse(source).is_ok()
    }

    /// Parsing already produces the matchable form, so this returns `self`.
    pub fn compile(self) -> Self {
        self
    }

    /// The requirement string as written
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Clauses in written order; every clause after the first carries its combinator
    pub fn clauses(&self) -> impl Iterator<Item = (Option<Combinator>, &Clause)> + '_ {
        std::iter::once((None, &self.first)).chain(self.rest.iter().map(|(c, clause)| (Some(*c), clause)))
    }

    /// Deprecated spellings that were accepted while parsing
    pub fn deprecations(&self) -> &[Deprecation] {
        &self.deprecations
    }

    /// Check a version against this requirement, allowing pre-releases
    pub fn matches(&self, version: &Version) -> bool {
        self.matches_with(version, MatchOptions::default())
    }

    /// Check a version against this requirement
    pub fn matches_with(&self, version: &Version, options: MatchOptions) -> bool {
        let matchable = Matchable::new(version, options.allow_pre);
        self.rest.iter().fold(
            matcher::matches_clause(&self.first, &matchable),
            |acc, (combinator, clause)| combinator.apply(acc, matcher::matches_clause(clause, &matchable)),
        )
    }
}

fn parse_clause<'a>(tokens: &mut impl Iterator<Item = Token<'a>>) -> Option<Clause> {
    let Some(Token::Operator(operator)) = tokens.next() else {
        return None;
    };
    let Some(Token::Operand(operand)) = tokens.next() else {
        return None;
    };
    let parts = parse_version(operand, operator.accepts_partial_operand())?;
    Some(Clause {
        operator,
        operand: Operand::from_parts(parts),
    })
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Requirement {
    type Err = InvalidRequirementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Requirement::parse(s)
    }
}

impl TryFrom<&str> for Requirement {
    type Error = InvalidRequirementError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Requirement::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Requirement {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Requirement {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Requirement::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn clause_list(req: &Requirement) -> Vec<String> {
        req.clauses()
            .map(|(combinator, clause)| match combinator {
                Some(c) => format!("{} {}", c, clause),
                None => clause.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_parse_simple() {
        let req = Requirement::parse("== 2.0.0").unwrap();
        assert_eq!(clause_list(&req), vec!["== 2.0.0"]);

        let req = Requirement::parse("2.0.0").unwrap();
        assert_eq!(clause_list(&req), vec!["== 2.0.0"]);

        let req = Requirement::parse(">=2.0.0-rc.1+build").unwrap();
        assert_eq!(clause_list(&req), vec![">= 2.0.0-rc.1+build"]);
    }

    #[test]
    fn test_parse_compound() {
        let req = Requirement::parse(">= 1.0.0 and < 2.0.0 or ~> 3.1").unwrap();
        assert_eq!(clause_list(&req), vec![">= 1.0.0", "and < 2.0.0", "or ~> 3.1"]);

        let req = Requirement::parse("1.0.0 or 2.0.0").unwrap();
        assert_eq!(clause_list(&req), vec!["== 1.0.0", "or == 2.0.0"]);
    }

    #[test]
    fn test_partial_operand_only_for_pessimistic() {
        assert!(Requirement::parse("~> 2.0").is_ok());
        assert!(Requirement::parse("~> 2.0-beta").is_ok());
        assert!(Requirement::parse(">= 2.0").is_err());
        assert!(Requirement::parse("== 2.0").is_err());
        assert!(Requirement::parse("2.0").is_err());
        assert!(Requirement::parse("~> 2").is_err());
    }

    #[test]
    fn test_parse_fails() {
        for source in [
            "",
            "   ",
            "== == 1.0.0",
            ">= 1.0.0 and",
            ">= 1.0.0 and ",
            " or 1.0.0",
            "1.0.0 2.0.0",
            ">=",
            "1.0.0 and and 2.0.0",
            "~> 1.0.0 or > foo",
            "~>",
            "01.0.0",
            ">= 1.0.0 && < 2.0.0",
        ] {
            let err = Requirement::parse(source).unwrap_err();
            assert_eq!(err.input(), source, "{:?} should be rejected", source);
        }
    }

    #[test]
    fn test_display_is_source() {
        let source = ">=1.0.0  and <2.0.0";
        assert_eq!(Requirement::parse(source).unwrap().to_string(), source);
    }

    #[test]
    fn test_deprecated_syntax_is_accepted() {
        let req = Requirement::parse("!= 1.0.0").unwrap();
        assert_eq!(clause_list(&req), vec!["!= 1.0.0"]);
        assert_eq!(req.deprecations(), &[Deprecation::NotEqual]);
        assert!(!req.matches(&v("1.0.0")));
        assert!(req.matches(&v("1.0.1")));

        let req = Requirement::parse("!1.0.0").unwrap();
        assert_eq!(req.deprecations(), &[Deprecation::Bang]);
        assert!(req.matches(&v("2.0.0")));

        assert!(Requirement::parse("~> 1.0").unwrap().deprecations().is_empty());
    }

    #[test]
    fn test_compile_is_identity() {
        let req = Requirement::parse("~> 1.2").unwrap();
        assert_eq!(req.clone().compile(), req);
    }

    #[test]
    fn test_matches_basic_operators() {
        assert!(Requirement::must_parse("== 1.2.3").matches(&v("1.2.3+build")));
        assert!(Requirement::must_parse("!= 1.2.3").matches(&v("1.2.4")));
        assert!(Requirement::must_parse("< 1.2.3").matches(&v("1.2.3-rc")));
        assert!(Requirement::must_parse("<= 1.2.3").matches(&v("1.2.3")));
        assert!(Requirement::must_parse("> 1.2.3").matches(&v("1.2.4")));
        assert!(Requirement::must_parse(">= 1.2.3").matches(&v("1.2.3")));
        assert!(!Requirement::must_parse("> 1.2.3").matches(&v("1.2.3")));
    }

    #[test]
    fn test_must_parse() {
        assert_eq!(Requirement::must_parse("1.0.0").source(), "1.0.0");
    }

    #[test]
    #[should_panic(expected = "Invalid requirement string \"== == 1.0.0\"")]
    fn test_must_parse_panics() {
        Requirement::must_parse("== == 1.0.0");
    }

    #[test]
    fn test_from_str() {
        let req: Requirement = "~> 1.0".parse().unwrap();
        assert_eq!(req.source(), "~> 1.0");
        assert!(Requirement::try_from(">= foo").is_err());
        assert!(Requirement::is_valid("< 1.0.0"));
        assert!(!Requirement::is_valid("< 1.0"));
    }
}
