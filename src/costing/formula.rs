// src/costing/formula.rs

//! Avaliador aritmético restrito para fórmulas de frete.
//!
//! A fórmula cadastrada no destino é texto controlado pelo operador, então
//! ela NUNCA passa por avaliação dinâmica de código. A gramática aceita
//! apenas: literais numéricos, `+ - * / ( )`, menos unário e as variáveis
//! `peso`/`weight` e `valor`/`value` (sem distinção de maiúsculas).
//!
//! ```text
//! expr   = term  (("+" | "-") term)*
//! term   = factor (("*" | "/") factor)*
//! factor = "-" factor | numero | variavel | "(" expr ")"
//! ```

use nom::{
    branch::alt,
    character::complete::{alpha1, char, digit1, multispace0},
    combinator::{all_consuming, map, map_opt, map_res, opt, recognize},
    multi::fold_many0,
    sequence::{delimited, pair, preceded},
    IResult,
};
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Var {
    Weight, // peso / weight
    Value,  // valor / value
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(Decimal),
    Var(Var),
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormulaError {
    #[error("fórmula inválida: {0}")]
    Parse(String),

    #[error("divisão por zero na fórmula")]
    DivisionByZero,

    #[error("estouro aritmético na fórmula")]
    Overflow,
}

// ---
// Parsing
// ---

fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

// Literal numérico: dígitos com fração decimal opcional ("12", "12.5")
fn number(input: &str) -> IResult<&str, Expr> {
    map_res(
        recognize(pair(digit1, opt(pair(char('.'), digit1)))),
        |s: &str| Decimal::from_str(s).map(Expr::Number),
    )(input)
}

// Variável nomeada; qualquer outro identificador é rejeitado
fn variable(input: &str) -> IResult<&str, Expr> {
    map_opt(alpha1, |s: &str| match s.to_ascii_lowercase().as_str() {
        "peso" | "weight" => Some(Expr::Var(Var::Weight)),
        "valor" | "value" => Some(Expr::Var(Var::Value)),
        _ => None,
    })(input)
}

fn factor(input: &str) -> IResult<&str, Expr> {
    ws(alt((
        map(preceded(char('-'), factor), |e| Expr::Neg(Box::new(e))),
        number,
        variable,
        delimited(char('('), expr, char(')')),
    )))(input)
}

// Associatividade à esquerda via fold
fn term(input: &str) -> IResult<&str, Expr> {
    let (input, init) = factor(input)?;
    fold_many0(
        pair(ws(alt((char('*'), char('/')))), factor),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '*' => Expr::Mul(Box::new(acc), Box::new(rhs)),
            _ => Expr::Div(Box::new(acc), Box::new(rhs)),
        },
    )(input)
}

fn expr(input: &str) -> IResult<&str, Expr> {
    let (input, init) = term(input)?;
    fold_many0(
        pair(ws(alt((char('+'), char('-')))), term),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '+' => Expr::Add(Box::new(acc), Box::new(rhs)),
            _ => Expr::Sub(Box::new(acc), Box::new(rhs)),
        },
    )(input)
}

/// Faz o parse completo da fórmula (a entrada inteira precisa ser consumida).
pub fn parse(input: &str) -> Result<Expr, FormulaError> {
    match all_consuming(expr)(input) {
        Ok((_, ast)) => Ok(ast),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            let found: String = e.input.chars().take(20).collect();
            if found.is_empty() {
                Err(FormulaError::Parse("fim inesperado da expressão".to_string()))
            } else {
                Err(FormulaError::Parse(format!("trecho não reconhecido: '{found}'")))
            }
        }
        Err(nom::Err::Incomplete(_)) => {
            Err(FormulaError::Parse("expressão incompleta".to_string()))
        }
    }
}

// ---
// Avaliação
// ---

pub fn eval(expr: &Expr, weight: Decimal, value: Decimal) -> Result<Decimal, FormulaError> {
    match expr {
        Expr::Number(n) => Ok(*n),
        Expr::Var(Var::Weight) => Ok(weight),
        Expr::Var(Var::Value) => Ok(value),
        Expr::Neg(e) => Ok(-eval(e, weight, value)?),
        Expr::Add(a, b) => eval(a, weight, value)?
            .checked_add(eval(b, weight, value)?)
            .ok_or(FormulaError::Overflow),
        Expr::Sub(a, b) => eval(a, weight, value)?
            .checked_sub(eval(b, weight, value)?)
            .ok_or(FormulaError::Overflow),
        Expr::Mul(a, b) => eval(a, weight, value)?
            .checked_mul(eval(b, weight, value)?)
            .ok_or(FormulaError::Overflow),
        Expr::Div(a, b) => {
            let divisor = eval(b, weight, value)?;
            if divisor.is_zero() {
                return Err(FormulaError::DivisionByZero);
            }
            eval(a, weight, value)?
                .checked_div(divisor)
                .ok_or(FormulaError::Overflow)
        }
    }
}

/// Parse + avaliação em um passo (caminho usado pelo motor de custos).
pub fn evaluate(input: &str, weight: Decimal, value: Decimal) -> Result<Decimal, FormulaError> {
    eval(&parse(input)?, weight, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn run(formula: &str) -> Result<Decimal, FormulaError> {
        evaluate(formula, d("100"), d("1000"))
    }

    #[test]
    fn literais_e_precedencia() {
        assert_eq!(run("2 + 3 * 4"), Ok(d("14")));
        assert_eq!(run("2 * 3 + 4"), Ok(d("10")));
        assert_eq!(run("10 - 4 - 3"), Ok(d("3"))); // associativo à esquerda
        assert_eq!(run("12.5 + 0.5"), Ok(d("13.0")));
    }

    #[test]
    fn parenteses_e_menos_unario() {
        assert_eq!(run("(2 + 3) * 4"), Ok(d("20")));
        assert_eq!(run("-5 + 10"), Ok(d("5")));
        assert_eq!(run("-(2 + 3)"), Ok(d("-5")));
        assert_eq!(run("2 * -3"), Ok(d("-6")));
    }

    #[test]
    fn variaveis_e_apelidos() {
        assert_eq!(run("peso * 2"), Ok(d("200")));
        assert_eq!(run("weight * 2"), Ok(d("200")));
        assert_eq!(run("valor / 10"), Ok(d("100")));
        assert_eq!(run("value / 10"), Ok(d("100")));
        assert_eq!(run("PESO + Valor"), Ok(d("1100")));
        assert_eq!(run("peso * 0.5 + valor * 0.01"), Ok(d("60.00")));
    }

    #[test]
    fn identificador_desconhecido_rejeitado() {
        assert!(matches!(run("pesos * 2"), Err(FormulaError::Parse(_))));
        assert!(matches!(run("frete + 1"), Err(FormulaError::Parse(_))));
    }

    #[test]
    fn sintaxe_invalida_rejeitada() {
        assert!(matches!(run("10 +"), Err(FormulaError::Parse(_))));
        assert!(matches!(run("(1 + 2"), Err(FormulaError::Parse(_))));
        assert!(matches!(run("1 ** 2"), Err(FormulaError::Parse(_))));
        assert!(matches!(run(""), Err(FormulaError::Parse(_))));
    }

    #[test]
    fn tentativa_de_injecao_rejeitada() {
        // Qualquer coisa fora da gramática aritmética é erro de parse,
        // nunca código executado.
        assert!(matches!(run("require('fs')"), Err(FormulaError::Parse(_))));
        assert!(matches!(run("1; DROP TABLE skus"), Err(FormulaError::Parse(_))));
        assert!(matches!(run("peso.toString()"), Err(FormulaError::Parse(_))));
    }

    #[test]
    fn divisao_por_zero() {
        assert_eq!(run("10 / 0"), Err(FormulaError::DivisionByZero));
        assert_eq!(run("valor / (peso - 100)"), Err(FormulaError::DivisionByZero));
    }

    #[test]
    fn parse_valida_sem_avaliar() {
        // Usado na validação do cadastro de destino
        assert!(parse("peso * 1.2 + 15").is_ok());
        assert!(parse("10 > 2").is_err());
    }
}
