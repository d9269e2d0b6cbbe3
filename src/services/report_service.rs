// src/services/report_service.rs

use std::collections::BTreeMap;

use genpdf::{elements, style, Element};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    common::error::AppError,
    db::{CatalogRepository, CostsRepository},
    models::costs::{CostAlert, RecordStatus},
};

// --- Relatório de Fechamento de Período ---
// Consolida os registros de custo de um período: totais por categoria,
// resumo por SKU, contagem por status e os alertas gerados.

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub draft: i64,
    pub confirmed: i64,
    pub closed: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotals {
    pub direct_cost: Decimal,
    pub labor_cost: Decimal,
    pub indirect_cost: Decimal,
    pub freight_cost: Decimal,
    pub tax_cost: Decimal,
    pub wastage_value: Decimal,
    pub total_cost: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkuClosureSummary {
    pub sku_id: i64,
    pub sku_code: Option<String>,
    pub record_count: i64,
    pub quantity_produced: Decimal,
    pub total_cost: Decimal,
    pub average_unit_cost: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PeriodClosureReport {
    pub period: String,
    pub record_count: i64,
    pub status_counts: StatusCounts,
    pub totals: PeriodTotals,
    pub skus: Vec<SkuClosureSummary>,
    pub alerts: Vec<CostAlert>,
}

#[derive(Clone)]
pub struct ReportService {
    costs_repo: CostsRepository,
    catalog_repo: CatalogRepository,
}

impl ReportService {
    pub fn new(costs_repo: CostsRepository, catalog_repo: CatalogRepository) -> Self {
        Self { costs_repo, catalog_repo }
    }

    pub async fn period_closure(&self, period: &str) -> Result<PeriodClosureReport, AppError> {
        let records = self.costs_repo.get_records_by_period(period).await?;
        let alerts = self.costs_repo.get_alerts_by_record_period(period).await?;

        // Mapa id -> código para enriquecer o resumo por SKU
        let sku_codes: BTreeMap<i64, String> = self
            .catalog_repo
            .get_all_skus()
            .await?
            .into_iter()
            .map(|s| (s.id, s.code))
            .collect();

        let mut status_counts = StatusCounts { draft: 0, confirmed: 0, closed: 0 };
        let mut totals = PeriodTotals {
            direct_cost: Decimal::ZERO,
            labor_cost: Decimal::ZERO,
            indirect_cost: Decimal::ZERO,
            freight_cost: Decimal::ZERO,
            tax_cost: Decimal::ZERO,
            wastage_value: Decimal::ZERO,
            total_cost: Decimal::ZERO,
        };

        let mut by_sku: BTreeMap<i64, SkuClosureSummary> = BTreeMap::new();

        for record in &records {
            match record.status {
                RecordStatus::Draft => status_counts.draft += 1,
                RecordStatus::Confirmed => status_counts.confirmed += 1,
                RecordStatus::Closed => status_counts.closed += 1,
            }

            totals.direct_cost += record.direct_cost;
            totals.labor_cost += record.labor_cost;
            totals.indirect_cost += record.indirect_cost;
            totals.freight_cost += record.freight_cost;
            totals.tax_cost += record.tax_cost;
            totals.wastage_value += record.wastage_value;
            totals.total_cost += record.total_cost;

            let entry = by_sku.entry(record.sku_id).or_insert_with(|| SkuClosureSummary {
                sku_id: record.sku_id,
                sku_code: sku_codes.get(&record.sku_id).cloned(),
                record_count: 0,
                quantity_produced: Decimal::ZERO,
                total_cost: Decimal::ZERO,
                average_unit_cost: Decimal::ZERO,
            });
            entry.record_count += 1;
            entry.quantity_produced += record.quantity_produced;
            entry.total_cost += record.total_cost;
        }

        let skus = by_sku
            .into_values()
            .map(|mut s| {
                if s.quantity_produced > Decimal::ZERO {
                    s.average_unit_cost = s.total_cost / s.quantity_produced;
                }
                s
            })
            .collect();

        Ok(PeriodClosureReport {
            period: period.to_string(),
            record_count: records.len() as i64,
            status_counts,
            totals,
            skus,
            alerts,
        })
    }

    // Versão imprimível do fechamento
    pub async fn period_closure_pdf(&self, period: &str) -> Result<Vec<u8>, AppError> {
        let report = self.period_closure(period).await?;

        // Carrega a fonte da pasta 'fonts/'
        let font_family = genpdf::fonts::from_files("./fonts", "Roboto", None)
            .map_err(|_| AppError::FontNotFound("Fonte não encontrada na pasta ./fonts".to_string()))?;

        let mut doc = genpdf::Document::new(font_family);
        doc.set_title(format!("Fechamento de Custos {}", report.period));
        let mut decorator = genpdf::SimplePageDecorator::new();
        decorator.set_margins(10);
        doc.set_page_decorator(decorator);

        // --- CABEÇALHO ---
        doc.push(
            elements::Paragraph::new("FECHAMENTO DE CUSTOS")
                .styled(style::Style::new().bold().with_font_size(18)),
        );
        doc.push(elements::Paragraph::new(format!("Período: {}", report.period)));
        doc.push(elements::Paragraph::new(format!(
            "Registros: {} (rascunho {}, confirmado {}, fechado {})",
            report.record_count,
            report.status_counts.draft,
            report.status_counts.confirmed,
            report.status_counts.closed
        )));
        doc.push(elements::Break::new(2));

        // --- RESUMO POR SKU ---
        // Pesos das colunas: Código (3), Registros (1), Qtd (2), Total (2), Unitário (2)
        let mut table = elements::TableLayout::new(vec![3, 1, 2, 2, 2]);
        table.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));

        let style_bold = style::Style::new().bold();
        table
            .row()
            .element(elements::Paragraph::new("SKU").styled(style_bold))
            .element(elements::Paragraph::new("Reg.").styled(style_bold))
            .element(elements::Paragraph::new("Qtd").styled(style_bold))
            .element(elements::Paragraph::new("Total").styled(style_bold))
            .element(elements::Paragraph::new("Unitário").styled(style_bold))
            .push()
            .expect("Table error");

        for sku in &report.skus {
            let code = sku
                .sku_code
                .clone()
                .unwrap_or_else(|| format!("#{}", sku.sku_id));
            table
                .row()
                .element(elements::Paragraph::new(code))
                .element(elements::Paragraph::new(format!("{}", sku.record_count)))
                .element(elements::Paragraph::new(format!("{:.2}", sku.quantity_produced)))
                .element(elements::Paragraph::new(format!("R$ {:.2}", sku.total_cost)))
                .element(elements::Paragraph::new(format!("R$ {:.4}", sku.average_unit_cost)))
                .push()
                .expect("Table row error");
        }

        doc.push(table);
        doc.push(elements::Break::new(2));

        // --- TOTAIS DO PERÍODO ---
        doc.push(
            elements::Paragraph::new("TOTAIS DO PERÍODO")
                .styled(style::Style::new().bold().with_font_size(12)),
        );
        doc.push(elements::Paragraph::new(format!("Material direto: R$ {:.2}", report.totals.direct_cost)));
        doc.push(elements::Paragraph::new(format!("Mão de obra: R$ {:.2}", report.totals.labor_cost)));
        doc.push(elements::Paragraph::new(format!("Indiretos: R$ {:.2}", report.totals.indirect_cost)));
        doc.push(elements::Paragraph::new(format!("Frete: R$ {:.2}", report.totals.freight_cost)));
        doc.push(elements::Paragraph::new(format!("Impostos: R$ {:.2}", report.totals.tax_cost)));
        doc.push(elements::Paragraph::new(format!("Perdas: R$ {:.2}", report.totals.wastage_value)));

        let mut total_paragraph =
            elements::Paragraph::new(format!("TOTAL GERAL: R$ {:.2}", report.totals.total_cost));
        total_paragraph.set_alignment(genpdf::Alignment::Right);
        doc.push(total_paragraph.styled(style::Style::new().bold().with_font_size(12)));

        // --- ALERTAS DO PERÍODO ---
        if !report.alerts.is_empty() {
            doc.push(elements::Break::new(2));
            doc.push(
                elements::Paragraph::new(format!("ALERTAS DE VARIAÇÃO ({})", report.alerts.len()))
                    .styled(style::Style::new().bold().with_font_size(12)),
            );
            for alert in &report.alerts {
                doc.push(elements::Paragraph::new(format!(
                    "SKU #{}: {:.4} -> {:.4} ({:.2}%)",
                    alert.sku_id,
                    alert.previous_unit_cost,
                    alert.current_unit_cost,
                    alert.variation_percent
                )));
            }
        }

        // Renderiza para buffer (memória)
        let mut buffer = Vec::new();
        doc.render(&mut buffer)
            .map_err(|e| AppError::PdfError(e.to_string()))?;

        Ok(buffer)
    }
}
