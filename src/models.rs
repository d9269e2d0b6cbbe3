pub mod auth;
pub mod catalog;
pub mod costs;
pub mod hr;
pub mod indirect;
pub mod logistics;

use rust_decimal::Decimal;
use validator::ValidationError;

// ---
// Validações customizadas compartilhadas pelos payloads
// ---

pub fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

// Período no formato 'YYYY-MM' (validado convertendo para o dia 1º do mês)
pub fn validate_period(period: &str) -> Result<(), ValidationError> {
    let valid = period.len() == 7
        && chrono::NaiveDate::parse_from_str(&format!("{period}-01"), "%Y-%m-%d").is_ok();
    if !valid {
        let mut err = ValidationError::new("period");
        err.message = Some("O período deve estar no formato YYYY-MM.".into());
        return Err(err);
    }
    Ok(())
}

// Quantidade mínima aceita pelo cálculo de custos (evita divisão por zero)
pub fn validate_min_quantity(val: &Decimal) -> Result<(), ValidationError> {
    if *val < Decimal::new(1, 2) {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.01);
        err.message = Some("A quantidade produzida deve ser de no mínimo 0.01.".into());
        return Err(err);
    }
    Ok(())
}

pub fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn periodo_no_formato_ano_mes() {
        assert!(validate_period("2026-07").is_ok());
        assert!(validate_period("1999-12").is_ok());
        assert!(validate_period("2026-13").is_err());
        assert!(validate_period("2026/07").is_err());
        assert!(validate_period("26-07").is_err());
        assert!(validate_period("2026-07-01").is_err());
    }

    #[test]
    fn quantidade_minima_de_producao() {
        assert!(validate_min_quantity(&Decimal::from_str("0.01").unwrap()).is_ok());
        assert!(validate_min_quantity(&Decimal::from_str("100").unwrap()).is_ok());
        assert!(validate_min_quantity(&Decimal::from_str("0.009").unwrap()).is_err());
        assert!(validate_min_quantity(&Decimal::ZERO).is_err());
    }

    #[test]
    fn valores_negativos_rejeitados() {
        assert!(validate_not_negative(&Decimal::ZERO).is_ok());
        assert!(validate_not_negative(&Decimal::from_str("-0.01").unwrap()).is_err());
    }
}
