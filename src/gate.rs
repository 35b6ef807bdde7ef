//! Gate networks loaded from minimized sums of products.
//!
//! The accepted grammar is strict: space-separated ```AND```/```OR``` keywords, ```NOT```
//! before an identifier or a parenthesized group, the constants ```0``` and ```1```.
//! Operator synonyms are rejected.

use crate::*;

use log::trace;
use pest::{iterators, Parser};
use std::collections::BTreeSet;
use std::str::FromStr;

#[derive(Parser)]
#[grammar_inline = r####"
sop    = _{ SOI ~ disj ~ EOI }
disj   =  { conj ~ ( or_kw ~ conj )* }
conj   =  { unary ~ ( and_kw ~ unary )* }
unary  = _{ neg | atom }
neg    =  { not_kw ~ atom }
atom   = _{ bt | bf | lit | "(" ~ disj ~ ")" }
bt     =  { "1" }
bf     =  { "0" }
lit    = @{ !keyword ~ ASCII_ALPHA+ }

keyword = @{ ("AND" | "OR" | "NOT") ~ !ASCII_ALPHA }
and_kw  = @{ "AND" ~ !ASCII_ALPHA }
or_kw   = @{ "OR" ~ !ASCII_ALPHA }
not_kw  = @{ "NOT" ~ !ASCII_ALPHA }

WHITESPACE = _{ " " }
"####]
struct SopParser;

/// A network of n-ary gates.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Gate {
    Input(String),
    Const(bool),
    Not(Box<Gate>),
    And(Vec<Gate>),
    Or(Vec<Gate>),
}

impl Gate {
    /// Load a minimized sum of products
    pub fn parse(text: &str) -> Result<Gate, BoolFnError> {
        let mut parsed = SopParser::parse(Rule::sop, text)
            .map_err(|e| BoolFnError::InvalidExpression(e.to_string()))?;
        let root = parsed
            .next()
            .ok_or_else(|| BoolFnError::InvalidExpression(text.to_string()))?;
        let gate = load(root)?;
        trace!("loaded '{}' with {} gates", text, gate.gate_count());
        Ok(gate)
    }

    /// Number of logic gates (inputs and constants excluded)
    pub fn gate_count(&self) -> usize {
        match self {
            Gate::Input(_) | Gate::Const(_) => 0,
            Gate::Not(child) => 1 + child.gate_count(),
            Gate::And(children) | Gate::Or(children) => {
                1 + children.iter().map(|c| c.gate_count()).sum::<usize>()
            }
        }
    }

    /// Number of gates on the longest path from an input to the output
    pub fn depth(&self) -> usize {
        match self {
            Gate::Input(_) | Gate::Const(_) => 0,
            Gate::Not(child) => 1 + child.depth(),
            Gate::And(children) | Gate::Or(children) => {
                1 + children.iter().map(|c| c.depth()).max().unwrap_or(0)
            }
        }
    }
}

fn load(pair: iterators::Pair<Rule>) -> Result<Gate, BoolFnError> {
    let rule = pair.as_rule();
    match rule {
        Rule::bt => Ok(Gate::Const(true)),
        Rule::bf => Ok(Gate::Const(false)),
        Rule::lit => Ok(Gate::Input(pair.as_str().to_string())),
        Rule::neg => {
            let child = pair
                .into_inner()
                .find(|p| p.as_rule() != Rule::not_kw)
                .ok_or_else(|| BoolFnError::InvalidExpression(String::from("NOT")))?;
            Ok(Gate::Not(Box::new(load(child)?)))
        }
        Rule::conj | Rule::disj => {
            let mut children = pair
                .into_inner()
                .filter(|p| !matches!(p.as_rule(), Rule::and_kw | Rule::or_kw))
                .map(load)
                .collect::<Result<Vec<_>, _>>()?;
            if children.len() == 1 {
                return Ok(children.remove(0));
            }
            Ok(if rule == Rule::conj {
                Gate::And(children)
            } else {
                Gate::Or(children)
            })
        }
        // Other rules are hidden or only found in keywords
        _ => Err(BoolFnError::InvalidExpression(pair.as_str().to_string())),
    }
}

impl Formula for Gate {
    fn eval_with(&self, lookup: &dyn Fn(&str) -> Option<bool>) -> Result<bool, BoolFnError> {
        match self {
            Gate::Input(name) => lookup(name).ok_or_else(|| BoolFnError::UnboundVariable(name.clone())),
            Gate::Const(b) => Ok(*b),
            Gate::Not(child) => Ok(!child.eval_with(lookup)?),
            Gate::And(children) => {
                for c in children {
                    if !c.eval_with(lookup)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Gate::Or(children) => {
                for c in children {
                    if c.eval_with(lookup)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }

    fn collect_variables(&self, variables: &mut BTreeSet<String>) {
        match self {
            Gate::Input(name) => {
                variables.insert(name.clone());
            }
            Gate::Const(_) => (),
            Gate::Not(child) => child.collect_variables(variables),
            Gate::And(children) | Gate::Or(children) => {
                children.iter().for_each(|c| c.collect_variables(variables))
            }
        }
    }
}

impl FromStr for Gate {
    type Err = BoolFnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gate::parse(s)
    }
}
