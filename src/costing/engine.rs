// src/costing/engine.rs

//! Composição de custos: material direto, mão de obra, indiretos, frete e
//! impostos, perda e totais finais. Todas as funções são puras; as políticas
//! de degradação (linha de ficha técnica sem item, fórmula de frete
//! inválida) viram marcações no detalhamento em vez de zeros mudos.

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::costing::formula;
use crate::models::{
    catalog::Sku,
    costs::AlertDirection,
    hr::Employee,
    indirect::IndirectCost,
    logistics::{FreightKind, ShippingDestination},
};

// ---
// Entradas (preenchidas pelos repositórios)
// ---

// Linha da ficha técnica já resolvida contra o almoxarifado.
// `item = None` significa item não encontrado: a linha entra no
// detalhamento como ignorada e contribui com zero.
#[derive(Debug, Clone)]
pub struct BomLine {
    pub bom_item_id: i64,
    pub warehouse_item_id: i64,
    pub quantity_per_unit: Decimal,
    pub item: Option<ItemPrice>,
}

#[derive(Debug, Clone)]
pub struct ItemPrice {
    pub code: String,
    pub name: String,
    pub unit_cost: Decimal,
}

#[derive(Debug, Clone)]
pub struct CostInputs {
    pub sku: Sku,
    pub period: String,
    pub quantity_produced: Decimal,
    pub wastage_percent: Decimal,
    // None => usa o preço sugerido do SKU
    pub selling_price: Option<Decimal>,
    pub bom_lines: Vec<BomLine>,
    pub employees: Vec<Employee>,
    pub indirect_entries: Vec<IndirectCost>,
    pub destination: Option<ShippingDestination>,
}

// ---
// Saídas (serializadas no registro de custo e na resposta da API)
// ---

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LineStatus {
    Computed,
    Skipped,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DirectCostLine {
    pub bom_item_id: i64,
    pub warehouse_item_id: i64,
    pub item_code: Option<String>,
    pub item_name: Option<String>,
    pub quantity_per_unit: Decimal,
    pub total_quantity: Decimal,
    pub unit_cost: Option<Decimal>,
    pub line_total: Decimal,
    pub status: LineStatus,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DirectCostBreakdown {
    pub total: Decimal,
    pub lines: Vec<DirectCostLine>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LaborEntry {
    pub employee_id: i64,
    pub name: String,
    pub sector: String,
    pub position: String,
    pub total_cost: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LaborBreakdown {
    pub total: Decimal,
    pub entries: Vec<LaborEntry>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IndirectEntry {
    pub category: String,
    pub description: Option<String>,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IndirectBreakdown {
    pub total: Decimal,
    pub entries: Vec<IndirectEntry>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaxEntry {
    pub name: String,
    pub percent: Decimal,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FreightTaxBreakdown {
    pub destination_id: Option<i64>,
    pub destination_name: Option<String>,
    pub estimated_weight: Decimal,
    pub estimated_value: Decimal,
    pub freight_cost: Decimal,
    // Fórmula falhou: frete degradado para zero (marcado, nunca silencioso)
    pub freight_degraded: bool,
    pub freight_note: Option<String>,
    pub taxes: Vec<TaxEntry>,
    pub tax_total: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostTotals {
    pub direct_cost: Decimal,
    pub labor_cost: Decimal,
    pub indirect_cost: Decimal,
    pub freight_cost: Decimal,
    pub tax_cost: Decimal,
    pub subtotal: Decimal,
    pub wastage_percent: Decimal,
    pub wastage_value: Decimal,
    pub total_cost: Decimal,
    pub unit_cost: Decimal,
    pub selling_price: Decimal,
    pub gross_margin: Decimal,
    pub gross_margin_percent: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostCalculation {
    pub sku_id: i64,
    pub sku_code: String,
    pub sku_description: String,
    pub period: String,
    pub quantity_produced: Decimal,
    pub direct: DirectCostBreakdown,
    pub labor: LaborBreakdown,
    pub indirect: IndirectBreakdown,
    pub freight: FreightTaxBreakdown,
    pub totals: CostTotals,
}

// Decisão de alerta de variação (persistida pelo service junto do registro)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VarianceAlert {
    pub previous_unit_cost: Decimal,
    pub current_unit_cost: Decimal,
    pub variation_percent: Decimal,
    pub threshold_percent: Decimal,
    pub direction: AlertDirection,
}

// ---
// Cálculo por componente
// ---

/// Custo de material direto: explode a ficha técnica contra o custo unitário
/// atual do almoxarifado. Nenhuma perda é aplicada aqui (a perda incide uma
/// única vez, sobre o subtotal).
pub fn direct_material_cost(lines: &[BomLine], quantity_produced: Decimal) -> DirectCostBreakdown {
    let mut total = Decimal::ZERO;
    let mut detail = Vec::with_capacity(lines.len());

    for line in lines {
        let total_quantity = line.quantity_per_unit * quantity_produced;
        match &line.item {
            Some(item) => {
                let line_total = item.unit_cost * total_quantity;
                total += line_total;
                detail.push(DirectCostLine {
                    bom_item_id: line.bom_item_id,
                    warehouse_item_id: line.warehouse_item_id,
                    item_code: Some(item.code.clone()),
                    item_name: Some(item.name.clone()),
                    quantity_per_unit: line.quantity_per_unit,
                    total_quantity,
                    unit_cost: Some(item.unit_cost),
                    line_total,
                    status: LineStatus::Computed,
                    reason: None,
                });
            }
            None => {
                tracing::warn!(
                    bom_item_id = line.bom_item_id,
                    warehouse_item_id = line.warehouse_item_id,
                    "Linha da ficha técnica ignorada: item de almoxarifado inexistente"
                );
                detail.push(DirectCostLine {
                    bom_item_id: line.bom_item_id,
                    warehouse_item_id: line.warehouse_item_id,
                    item_code: None,
                    item_name: None,
                    quantity_per_unit: line.quantity_per_unit,
                    total_quantity,
                    unit_cost: None,
                    line_total: Decimal::ZERO,
                    status: LineStatus::Skipped,
                    reason: Some("item de almoxarifado inexistente".to_string()),
                });
            }
        }
    }

    DirectCostBreakdown { total, lines: detail }
}

/// Custo totalmente carregado de um funcionário: salário base + encargos
/// habilitados (percentuais sobre o salário) + "outros custos" (valor fixo).
pub fn employee_loaded_cost(e: &Employee) -> Decimal {
    let charge = |enabled: bool, percent: Decimal| {
        if enabled {
            e.base_salary * percent / Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        }
    };

    let mut total = e.base_salary;
    total += charge(e.fgts_enabled, e.fgts_percent);
    total += charge(e.inss_enabled, e.inss_percent);
    total += charge(e.vacation_enabled, e.vacation_percent);
    total += charge(e.vacation_bonus_enabled, e.vacation_bonus_percent);
    total += charge(e.thirteenth_enabled, e.thirteenth_percent);
    total += charge(e.rat_enabled, e.rat_percent);
    if e.other_costs_enabled {
        total += e.other_costs_value;
    }
    total
}

/// Mão de obra em pool: soma o custo carregado de todos os funcionários
/// ativos, independente de SKU, período ou volume produzido.
pub fn labor_cost(employees: &[Employee]) -> LaborBreakdown {
    let mut total = Decimal::ZERO;
    let mut entries = Vec::new();

    for e in employees.iter().filter(|e| e.active) {
        let cost = employee_loaded_cost(e);
        total += cost;
        entries.push(LaborEntry {
            employee_id: e.id,
            name: e.name.clone(),
            sector: e.sector.clone(),
            position: e.position.clone(),
            total_cost: cost,
        });
    }

    LaborBreakdown { total, entries }
}

/// Custos indiretos do período: soma simples de todos os lançamentos,
/// sem rateio por SKU ou centro de custo.
pub fn indirect_cost(entries: &[IndirectCost]) -> IndirectBreakdown {
    let mut total = Decimal::ZERO;
    let mut detail = Vec::with_capacity(entries.len());

    for entry in entries {
        total += entry.value;
        detail.push(IndirectEntry {
            category: entry.category.clone(),
            description: entry.description.clone(),
            amount: entry.value,
        });
    }

    IndirectBreakdown { total, entries: detail }
}

/// Frete e impostos estimados para o destino. Fórmula malformada degrada o
/// frete para zero (o cálculo nunca falha por causa dela), com a falha
/// registrada no detalhamento e no log.
pub fn freight_and_taxes(
    destination: Option<&ShippingDestination>,
    estimated_weight: Decimal,
    estimated_value: Decimal,
) -> FreightTaxBreakdown {
    let Some(dest) = destination else {
        return FreightTaxBreakdown {
            destination_id: None,
            destination_name: None,
            estimated_weight,
            estimated_value,
            freight_cost: Decimal::ZERO,
            freight_degraded: false,
            freight_note: None,
            taxes: Vec::new(),
            tax_total: Decimal::ZERO,
        };
    };

    let (freight_cost, freight_degraded, freight_note) = match dest.freight_kind {
        FreightKind::FixedValue => (dest.freight_value.unwrap_or(Decimal::ZERO), false, None),
        FreightKind::Formula => {
            let raw = dest.freight_formula.as_deref().unwrap_or("");
            match formula::evaluate(raw, estimated_weight, estimated_value) {
                Ok(v) => (v, false, None),
                Err(e) => {
                    tracing::warn!(
                        destination_id = dest.id,
                        formula = raw,
                        error = %e,
                        "Fórmula de frete falhou; frete degradado para zero"
                    );
                    (Decimal::ZERO, true, Some(e.to_string()))
                }
            }
        }
    };

    let rates = [
        ("ICMS", dest.icms_percent),
        ("ICMS-ST", dest.icms_st_percent),
        ("PIS", dest.pis_percent),
        ("COFINS", dest.cofins_percent),
        ("IPI", dest.ipi_percent),
    ];

    let mut tax_total = Decimal::ZERO;
    let taxes = rates
        .into_iter()
        .map(|(name, percent)| {
            let amount = estimated_value * percent / Decimal::ONE_HUNDRED;
            tax_total += amount;
            TaxEntry { name: name.to_string(), percent, amount }
        })
        .collect();

    FreightTaxBreakdown {
        destination_id: Some(dest.id),
        destination_name: Some(dest.name.clone()),
        estimated_weight,
        estimated_value,
        freight_cost,
        freight_degraded,
        freight_note,
        taxes,
        tax_total,
    }
}

/// Composição final: subtotal, perda, custo total/unitário e margens.
/// O chamador garante `quantity_produced > 0` via validação de entrada.
pub fn compose_totals(
    direct: Decimal,
    labor: Decimal,
    indirect: Decimal,
    freight: Decimal,
    tax: Decimal,
    wastage_percent: Decimal,
    quantity_produced: Decimal,
    selling_price: Decimal,
) -> CostTotals {
    let subtotal = direct + labor + indirect + freight + tax;
    let wastage_value = subtotal * wastage_percent / Decimal::ONE_HUNDRED;
    let total_cost = subtotal + wastage_value;
    let unit_cost = total_cost / quantity_produced;

    let (gross_margin, gross_margin_percent) = if selling_price > Decimal::ZERO {
        let margin = selling_price - unit_cost;
        (margin, margin / selling_price * Decimal::ONE_HUNDRED)
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    CostTotals {
        direct_cost: direct,
        labor_cost: labor,
        indirect_cost: indirect,
        freight_cost: freight,
        tax_cost: tax,
        subtotal,
        wastage_percent,
        wastage_value,
        total_cost,
        unit_cost,
        selling_price,
        gross_margin,
        gross_margin_percent,
    }
}

/// Comparação unilateral contra o ÚLTIMO registro confirmado (nunca média
/// móvel). Sem registro anterior, ou com custo anterior não positivo, não
/// há alerta.
pub fn variance_decision(
    previous_unit_cost: Option<Decimal>,
    current_unit_cost: Decimal,
    threshold_percent: Decimal,
) -> Option<VarianceAlert> {
    let previous = previous_unit_cost?;
    if previous <= Decimal::ZERO {
        return None;
    }

    let variation_percent =
        (current_unit_cost - previous) / previous * Decimal::ONE_HUNDRED;

    if variation_percent.abs() < threshold_percent {
        return None;
    }

    Some(VarianceAlert {
        previous_unit_cost: previous,
        current_unit_cost,
        variation_percent,
        threshold_percent,
        direction: if variation_percent > Decimal::ZERO {
            AlertDirection::Increase
        } else {
            AlertDirection::Decrease
        },
    })
}

/// Rodada completa de cálculo sobre dados mestres já carregados.
pub fn calculate(inputs: CostInputs) -> CostCalculation {
    let selling_price = inputs
        .selling_price
        .unwrap_or(inputs.sku.suggested_price);

    let estimated_weight = inputs.sku.package_weight_kg * inputs.quantity_produced;
    let estimated_value = selling_price * inputs.quantity_produced;

    let direct = direct_material_cost(&inputs.bom_lines, inputs.quantity_produced);
    let labor = labor_cost(&inputs.employees);
    let indirect = indirect_cost(&inputs.indirect_entries);
    let freight = freight_and_taxes(inputs.destination.as_ref(), estimated_weight, estimated_value);

    let totals = compose_totals(
        direct.total,
        labor.total,
        indirect.total,
        freight.freight_cost,
        freight.tax_total,
        inputs.wastage_percent,
        inputs.quantity_produced,
        selling_price,
    );

    CostCalculation {
        sku_id: inputs.sku.id,
        sku_code: inputs.sku.code.clone(),
        sku_description: inputs.sku.description.clone(),
        period: inputs.period,
        quantity_produced: inputs.quantity_produced,
        direct,
        labor,
        indirect,
        freight,
        totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sku() -> Sku {
        Sku {
            id: 1,
            code: "COCO-RALADO-1KG".to_string(),
            description: "Coco ralado desidratado 1kg".to_string(),
            package_weight_kg: d("1.0"),
            shelf_life_days: 180,
            suggested_price: Decimal::ZERO,
            current_stock: Decimal::ZERO,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn bom_line(unit_cost: &str, qty_per_unit: &str) -> BomLine {
        BomLine {
            bom_item_id: 10,
            warehouse_item_id: 20,
            quantity_per_unit: d(qty_per_unit),
            item: Some(ItemPrice {
                code: "MP-001".to_string(),
                name: "Coco in natura".to_string(),
                unit_cost: d(unit_cost),
            }),
        }
    }

    fn employee(base_salary: &str) -> Employee {
        Employee {
            id: 1,
            name: "Maria".to_string(),
            sector: "Produção".to_string(),
            position: "Operadora".to_string(),
            base_salary: d(base_salary),
            active: true,
            fgts_enabled: false,
            fgts_percent: Decimal::ZERO,
            inss_enabled: false,
            inss_percent: Decimal::ZERO,
            vacation_enabled: false,
            vacation_percent: Decimal::ZERO,
            vacation_bonus_enabled: false,
            vacation_bonus_percent: Decimal::ZERO,
            thirteenth_enabled: false,
            thirteenth_percent: Decimal::ZERO,
            rat_enabled: false,
            rat_percent: Decimal::ZERO,
            other_costs_enabled: false,
            other_costs_value: Decimal::ZERO,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn destination() -> ShippingDestination {
        ShippingDestination {
            id: 7,
            name: "Sudeste".to_string(),
            freight_kind: FreightKind::FixedValue,
            freight_value: Some(d("50.00")),
            freight_formula: None,
            icms_percent: d("18"),
            icms_st_percent: Decimal::ZERO,
            pis_percent: d("1.65"),
            cofins_percent: d("7.6"),
            ipi_percent: Decimal::ZERO,
            active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn base_inputs() -> CostInputs {
        CostInputs {
            sku: sku(),
            period: "2026-07".to_string(),
            quantity_produced: d("100"),
            wastage_percent: Decimal::ZERO,
            selling_price: None,
            bom_lines: vec![bom_line("2.00", "1.0")],
            employees: Vec::new(),
            indirect_entries: Vec::new(),
            destination: None,
        }
    }

    #[test]
    fn ficha_tecnica_vazia_tem_custo_direto_zero() {
        let direct = direct_material_cost(&[], d("100"));
        assert_eq!(direct.total, Decimal::ZERO);
        assert!(direct.lines.is_empty());
    }

    // Uma linha de 2.00 x 1.0, quantidade 100, nada mais configurado:
    // direto 200.00, total 200.00, unitário 2.00
    #[test]
    fn calculo_somente_material_direto() {
        let calc = calculate(base_inputs());
        assert_eq!(calc.direct.total, d("200.00"));
        assert_eq!(calc.totals.subtotal, d("200.00"));
        assert_eq!(calc.totals.total_cost, d("200.00"));
        assert_eq!(calc.totals.unit_cost, d("2.00"));
        assert_eq!(calc.direct.lines[0].status, LineStatus::Computed);
    }

    // Mesmo caso com perda de 10%: perda 20.00, total 220.00, unitário 2.20
    #[test]
    fn perda_sobre_o_subtotal() {
        let mut inputs = base_inputs();
        inputs.wastage_percent = d("10");
        let calc = calculate(inputs);
        assert_eq!(calc.totals.wastage_value, d("20.0000"));
        assert_eq!(calc.totals.total_cost, d("220.0000"));
        assert_eq!(calc.totals.unit_cost, d("2.200000"));
    }

    #[test]
    fn identidade_total_igual_subtotal_vezes_fator_de_perda() {
        for w in ["0", "5", "10", "33.33", "150"] {
            let totals = compose_totals(
                d("123.45"),
                d("1000"),
                d("250.10"),
                d("42"),
                d("99.9"),
                d(w),
                d("100"),
                Decimal::ZERO,
            );
            let expected =
                totals.subtotal * (Decimal::ONE + d(w) / Decimal::ONE_HUNDRED);
            assert_eq!(totals.total_cost, expected);
        }
    }

    #[test]
    fn custo_unitario_vezes_quantidade_recompoe_o_total() {
        let totals = compose_totals(
            d("200"),
            d("10"),
            d("5"),
            d("0"),
            d("0"),
            d("7"),
            d("3"),
            Decimal::ZERO,
        );
        let diff = (totals.unit_cost * d("3") - totals.total_cost).abs();
        assert!(diff < d("0.000000001"), "diferença: {diff}");
    }

    #[test]
    fn preco_de_venda_nao_positivo_zera_margens() {
        let totals = compose_totals(
            d("100"),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            d("10"),
            Decimal::ZERO,
        );
        assert_eq!(totals.gross_margin, Decimal::ZERO);
        assert_eq!(totals.gross_margin_percent, Decimal::ZERO);
    }

    #[test]
    fn margem_com_preco_de_venda() {
        // unitário 10.00, venda 25.00 -> margem 15.00 (60%)
        let totals = compose_totals(
            d("100"),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            d("10"),
            d("25.00"),
        );
        assert_eq!(totals.gross_margin, d("15.00"));
        assert_eq!(totals.gross_margin_percent, d("60.0000"));
    }

    #[test]
    fn linha_sem_item_de_almoxarifado_e_ignorada_com_marcacao() {
        let lines = vec![
            bom_line("2.00", "1.0"),
            BomLine {
                bom_item_id: 11,
                warehouse_item_id: 999,
                quantity_per_unit: d("5"),
                item: None,
            },
        ];
        let direct = direct_material_cost(&lines, d("10"));
        assert_eq!(direct.total, d("20.000"));
        assert_eq!(direct.lines[1].status, LineStatus::Skipped);
        assert_eq!(direct.lines[1].line_total, Decimal::ZERO);
        assert!(direct.lines[1].reason.is_some());
    }

    #[test]
    fn encargos_somente_quando_habilitados() {
        let mut e = employee("1000");
        e.fgts_percent = d("8");
        e.inss_percent = d("20");
        // Toggles desligados: nada além do salário base
        assert_eq!(employee_loaded_cost(&e), d("1000"));

        e.fgts_enabled = true;
        assert_eq!(employee_loaded_cost(&e), d("1080.00"));

        e.inss_enabled = true;
        assert_eq!(employee_loaded_cost(&e), d("1280.00"));

        e.other_costs_enabled = true;
        e.other_costs_value = d("150");
        assert_eq!(employee_loaded_cost(&e), d("1430.00"));
    }

    #[test]
    fn mao_de_obra_ignora_inativos() {
        let mut inactive = employee("5000");
        inactive.id = 2;
        inactive.active = false;

        let breakdown = labor_cost(&[employee("1000"), inactive]);
        assert_eq!(breakdown.total, d("1000"));
        assert_eq!(breakdown.entries.len(), 1);
    }

    // Frete fixo 50.00; ICMS 18%, PIS 1.65%, COFINS 7.6%; valor 1000.00:
    // frete 50.00 e impostos 180 + 16.5 + 76 = 272.5
    #[test]
    fn frete_fixo_e_impostos() {
        let dest = destination();
        let freight = freight_and_taxes(Some(&dest), d("100"), d("1000.00"));
        assert_eq!(freight.freight_cost, d("50.00"));
        assert_eq!(freight.tax_total, d("272.500000"));
        assert!(!freight.freight_degraded);
    }

    #[test]
    fn frete_fixo_ignora_peso_e_valor() {
        let dest = destination();
        let a = freight_and_taxes(Some(&dest), d("1"), d("1"));
        let b = freight_and_taxes(Some(&dest), d("99999"), d("123456"));
        assert_eq!(a.freight_cost, d("50.00"));
        assert_eq!(b.freight_cost, d("50.00"));
    }

    #[test]
    fn frete_por_formula() {
        let mut dest = destination();
        dest.freight_kind = FreightKind::Formula;
        dest.freight_formula = Some("peso * 0.5 + 10".to_string());

        let freight = freight_and_taxes(Some(&dest), d("100"), d("1000"));
        assert_eq!(freight.freight_cost, d("60.0"));
        assert!(!freight.freight_degraded);
    }

    #[test]
    fn formula_invalida_degrada_frete_para_zero() {
        let mut dest = destination();
        dest.freight_kind = FreightKind::Formula;
        dest.freight_formula = Some("peso ** 2".to_string());

        let freight = freight_and_taxes(Some(&dest), d("100"), d("1000"));
        assert_eq!(freight.freight_cost, Decimal::ZERO);
        assert!(freight.freight_degraded);
        assert!(freight.freight_note.is_some());
        // Os impostos continuam sendo calculados normalmente
        assert_eq!(freight.tax_total, d("272.500000"));
    }

    #[test]
    fn sem_destino_nao_ha_frete_nem_impostos() {
        let freight = freight_and_taxes(None, d("100"), d("1000"));
        assert_eq!(freight.freight_cost, Decimal::ZERO);
        assert_eq!(freight.tax_total, Decimal::ZERO);
        assert!(freight.taxes.is_empty());
    }

    // Anterior 2.00, novo 2.50, limite 10%: +25% gera alerta de aumento
    #[test]
    fn variacao_acima_do_limite_gera_alerta() {
        let alert = variance_decision(Some(d("2.00")), d("2.50"), d("10")).unwrap();
        assert_eq!(alert.variation_percent, d("25.00"));
        assert_eq!(alert.direction, AlertDirection::Increase);
    }

    // Anterior 2.00, novo 2.05, limite 10%: +2.5% não gera alerta
    #[test]
    fn variacao_abaixo_do_limite_nao_gera_alerta() {
        assert!(variance_decision(Some(d("2.00")), d("2.05"), d("10")).is_none());
    }

    #[test]
    fn variacao_exatamente_no_limite_gera_alerta() {
        let alert = variance_decision(Some(d("2.00")), d("2.20"), d("10")).unwrap();
        assert_eq!(alert.variation_percent, d("10.00"));
    }

    #[test]
    fn queda_de_custo_gera_alerta_de_reducao() {
        let alert = variance_decision(Some(d("2.00")), d("1.50"), d("10")).unwrap();
        assert_eq!(alert.direction, AlertDirection::Decrease);
        assert_eq!(alert.variation_percent, d("-25.00"));
    }

    #[test]
    fn primeiro_calculo_nunca_gera_alerta() {
        assert!(variance_decision(None, d("2.50"), d("10")).is_none());
    }

    #[test]
    fn custo_anterior_nao_positivo_nao_gera_alerta() {
        assert!(variance_decision(Some(Decimal::ZERO), d("2.50"), d("10")).is_none());
    }

    #[test]
    fn preco_de_venda_cai_no_sugerido_do_sku() {
        let mut inputs = base_inputs();
        inputs.sku.suggested_price = d("4.00");
        inputs.selling_price = None;
        let calc = calculate(inputs);
        assert_eq!(calc.totals.selling_price, d("4.00"));
        assert_eq!(calc.totals.gross_margin, d("2.00"));

        let mut inputs = base_inputs();
        inputs.sku.suggested_price = d("4.00");
        inputs.selling_price = Some(d("5.00"));
        let calc = calculate(inputs);
        assert_eq!(calc.totals.selling_price, d("5.00"));
    }
}
