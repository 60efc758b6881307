//! Executive summary of a period: headline KPIs, status breakdown and the
//! best clients, on the same canvas and sections as the budget.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::canvas::*;
use crate::error::{ReportError, Result};
use crate::fmt::{date_br, money, timestamp_br};
use crate::models::{ExecutiveSpec, Kpis, StatusBreakdown, TopClient};
use crate::renderer;
use crate::report::write_atomic;
use crate::sections;
use crate::settings::Settings;
use crate::table::{self, Column};

pub const TITLE_CAPTION: &str = "RELATÓRIO EXECUTIVO";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const SUBTITLE: &str = "Gestão de Produções Audiovisuais";
const CAPTION_H: f32 = 8.0;
const ROW_H: f32 = 9.0;
const SECTION_GAP: f32 = 5.0;
const VALUE_OFFSET: f32 = 55.0;
const BAR_OFFSET: f32 = 45.0;
const BAR_W: f32 = 40.0;
const BAR_H: f32 = 5.0;

const RED_500: Color = Color::rgb(239, 68, 68);
const EMERALD_600: Color = Color::rgb(16, 185, 129);
const AMBER_500: Color = Color::rgb(245, 158, 11);
const VIOLET_500: Color = Color::rgb(139, 92, 246);
const CYAN_500: Color = Color::rgb(6, 182, 212);

const STATUS_COLORS: [Color; 4] = [EMERALD_600, AMBER_500, BRAND_BLUE, SLATE_500];

const CLIENT_COLUMNS: [Column; 4] = [
    Column {
        label: "#",
        fraction: 0.10,
        align: Align::Left,
    },
    Column {
        label: "Cliente",
        fraction: 0.45,
        align: Align::Left,
    },
    Column {
        label: "Produções",
        fraction: 0.20,
        align: Align::Right,
    },
    Column {
        label: "Total",
        fraction: 0.25,
        align: Align::Right,
    },
];

pub fn period_label(spec: &ExecutiveSpec) -> String {
    format!("{} - {} {}", spec.period_start, spec.period_end, spec.year)
}

/// `relatorio-executivo-fva-<start>_<end>_<year>.pdf`, lowercased, with
/// whitespace inside the period names turned into dashes.
pub fn file_name(spec: &ExecutiveSpec) -> String {
    let period = format!("{}_{}_{}", spec.period_start, spec.period_end, spec.year);
    let period: String = period
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("relatorio-executivo-fva-{period}.pdf")
}

fn invalid(msg: String) -> ReportError {
    ReportError::Validation(msg)
}

pub fn validate(spec: &ExecutiveSpec) -> Result<()> {
    if spec.period_start.trim().is_empty() || spec.period_end.trim().is_empty() {
        return Err(invalid("period start and end are required".to_string()));
    }

    let Kpis {
        revenue,
        costs,
        margin_pct,
        completion_rate,
        ..
    } = spec.kpis;
    for (name, value) in [("revenue", revenue), ("costs", costs)] {
        if value < 0 {
            return Err(invalid(format!("{name} is negative")));
        }
    }
    if !margin_pct.is_finite() {
        return Err(invalid("profit margin is not a number".to_string()));
    }
    if !(0.0..=100.0).contains(&completion_rate) {
        return Err(invalid(format!(
            "completion rate must be within 0..=100, got {completion_rate}"
        )));
    }

    for (label, pct) in spec.status.entries() {
        if pct > 100 {
            return Err(invalid(format!("{label}: share above 100% ({pct})")));
        }
    }

    for (i, client) in spec.top_clients.iter().enumerate() {
        if client.total < 0 {
            let msg = format!("client {} ({:?}): total is negative", i + 1, client.name);
            return Err(invalid(msg));
        }
    }
    Ok(())
}

fn percent(value: f64) -> String {
    format!("{value:.1}%").replace('.', ",")
}

fn kpi_rows(kpis: &Kpis) -> [(&'static str, String, Color); 6] {
    [
        ("Receita Total", money(kpis.revenue), BRAND_BLUE),
        ("Custos Totais", money(kpis.costs), RED_500),
        ("Lucro Líquido", money(kpis.net_profit), EMERALD_600),
        ("Margem de Lucro", percent(kpis.margin_pct), AMBER_500),
        ("Total de Produções", kpis.total_productions.to_string(), VIOLET_500),
        ("Taxa de Conclusão", percent(kpis.completion_rate), CYAN_500),
    ]
}

fn caption(canvas: &mut Canvas, text: &str, at: &Placement) {
    canvas.draw_text(text, at.x, at.y + 6.0, TextStyle::new(14.0, SLATE_800).bold());
}

fn row_band(at: &Placement, top: f32) -> Rect {
    Rect {
        x: at.x - 2.0,
        y: top,
        w: at.width + 4.0,
        h: ROW_H - 1.0,
    }
}

/// Caption and all six KPI rows form one block.
fn render_kpis(canvas: &mut Canvas, kpis: &Kpis) {
    let rows = kpi_rows(kpis);
    let height = CAPTION_H + rows.len() as f32 * ROW_H + SECTION_GAP;
    let at = canvas.reserve(BlockKind::Kpis, height);
    caption(canvas, "INDICADORES PRINCIPAIS", &at);

    let label_style = TextStyle::new(11.0, SLATE_800).bold();
    for (i, (label, value, color)) in rows.iter().enumerate() {
        let top = at.y + CAPTION_H + i as f32 * ROW_H;
        canvas.draw_filled_rect(row_band(&at, top), SLATE_50);
        let baseline = top + 5.5;
        canvas.draw_text(&format!("{label}:"), at.x, baseline, label_style);
        let value_style = TextStyle::new(11.0, *color);
        canvas.draw_text(value, at.x + VALUE_OFFSET, baseline, value_style);
    }
}

/// One row per status with a proportional bar. Rows are zebra-striped.
fn render_status(canvas: &mut Canvas, status: &StatusBreakdown, total: u32) {
    let entries = status.entries();
    let height = CAPTION_H + entries.len() as f32 * ROW_H + SECTION_GAP;
    let at = canvas.reserve(BlockKind::StatusBreakdown, height);
    caption(canvas, "STATUS DAS PRODUÇÕES", &at);

    let label_style = TextStyle::new(11.0, SLATE_800).bold();
    let count_style = TextStyle::new(11.0, SLATE_500);
    for (i, ((label, pct), color)) in entries.into_iter().zip(STATUS_COLORS).enumerate() {
        let top = at.y + CAPTION_H + i as f32 * ROW_H;
        if i % 2 == 0 {
            canvas.draw_filled_rect(row_band(&at, top), SLATE_50);
        }
        let baseline = top + 5.5;
        canvas.draw_text(&format!("{label}:"), at.x, baseline, label_style);

        let bar_x = at.x + BAR_OFFSET;
        let bar_y = top + (ROW_H - 1.0 - BAR_H) / 2.0;
        let track = Rect {
            x: bar_x,
            y: bar_y,
            w: BAR_W,
            h: BAR_H,
        };
        canvas.draw_filled_rect(track, SLATE_200);
        if pct > 0 {
            let fill = Rect {
                w: BAR_W * pct.min(100) as f32 / 100.0,
                ..track
            };
            canvas.draw_filled_rect(fill, color);
        }

        let pct_x = bar_x + BAR_W + 5.0;
        canvas.draw_text(&format!("{pct}%"), pct_x, baseline, TextStyle::new(11.0, color));
        let count = format!("{} produções", StatusBreakdown::count(total, pct));
        canvas.draw_text(&count, pct_x + 20.0, baseline, count_style);
    }
}

fn client_row(rank: usize, client: &TopClient) -> Vec<String> {
    vec![
        format!("{rank}."),
        client.name.clone(),
        client.productions.to_string(),
        money(client.total),
    ]
}

/// Validate and lay out the executive report. Deterministic for a given
/// `generated_at`.
pub fn layout(
    spec: &ExecutiveSpec,
    settings: &Settings,
    generated_at: NaiveDateTime,
) -> Result<Document> {
    validate(spec)?;
    let period = period_label(spec);
    let mut canvas = Canvas::new(&format!("Relatório Executivo {period}"));

    sections::header(&mut canvas, SLATE_800, &settings.brand_name, SUBTITLE);
    sections::banner(&mut canvas, BlockKind::Title, TITLE_CAPTION, BRAND_BLUE);
    sections::issue_line(
        &mut canvas,
        &format!("Gerado em: {}", date_br(&generated_at)),
        &format!("Período: {period}"),
    );
    render_kpis(&mut canvas, &spec.kpis);
    render_status(&mut canvas, &spec.status, spec.kpis.total_productions);

    let rows: Vec<Vec<String>> = spec
        .top_clients
        .iter()
        .enumerate()
        .map(|(i, c)| client_row(i + 1, c))
        .collect();
    table::render_table(&mut canvas, "TOP CLIENTES", &CLIENT_COLUMNS, &rows);

    let generated = format!("Gerado em: {}", timestamp_br(&generated_at));
    let version = format!("Versão: {VERSION}");
    sections::footer(
        &mut canvas,
        &[
            settings.footer_tagline.as_str(),
            "Relatório gerado automaticamente em tempo real",
        ],
        &[generated.as_str(), version.as_str()],
    );

    Ok(canvas.finish())
}

pub fn generate(spec: &ExecutiveSpec, settings: &Settings) -> Result<Vec<u8>> {
    renderer::ensure_available()?;
    let now = chrono::Local::now().naive_local();
    let doc = layout(spec, settings, now)?;
    let bytes = renderer::render(&doc)?;
    log::info!(
        "generated executive report {} ({} page(s))",
        period_label(spec),
        doc.page_count()
    );
    Ok(bytes)
}

pub fn default_path(dir: &Path, spec: &ExecutiveSpec) -> PathBuf {
    dir.join(file_name(spec))
}

/// Generate and write the report to `path`, through a `.part` sibling.
pub fn write_report(spec: &ExecutiveSpec, settings: &Settings, path: &Path) -> Result<()> {
    let bytes = generate(spec, settings)?;
    write_atomic(path, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap()
    }

    fn client(name: &str, productions: u32, total: i64) -> TopClient {
        TopClient {
            name: name.to_string(),
            productions,
            total,
        }
    }

    fn spec(clients: usize) -> ExecutiveSpec {
        ExecutiveSpec {
            period_start: "Janeiro".to_string(),
            period_end: "Junho".to_string(),
            year: 2025,
            kpis: Kpis {
                revenue: 32800000,
                costs: 18500000,
                net_profit: 14300000,
                margin_pct: 28.5,
                total_productions: 20,
                completion_rate: 85.2,
            },
            status: StatusBreakdown {
                completed: 60,
                in_progress: 25,
                approved: 10,
                draft: 5,
            },
            top_clients: (0..clients)
                .map(|i| client(&format!("Cliente {i}"), 2, 2500000))
                .collect(),
        }
    }

    fn build(spec: &ExecutiveSpec) -> Document {
        layout(spec, &Settings::default(), now()).unwrap()
    }

    #[test]
    fn test_file_name_uses_lowercased_period() {
        assert_eq!(
            file_name(&spec(0)),
            "relatorio-executivo-fva-janeiro_junho_2025.pdf"
        );
        let mut s = spec(0);
        s.period_end = "Segundo Semestre".to_string();
        assert_eq!(
            file_name(&s),
            "relatorio-executivo-fva-janeiro_segundo-semestre_2025.pdf"
        );
    }

    #[test]
    fn test_default_scenario_fits_one_page() {
        let doc = build(&spec(3));
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.count_blocks(BlockKind::Kpis), 1);
        assert_eq!(doc.count_blocks(BlockKind::StatusBreakdown), 1);
        assert_eq!(doc.count_blocks(BlockKind::TableRow), 3);
        assert!(doc.texts().any(|t| t == "RELATÓRIO EXECUTIVO"));
        assert!(doc.texts().any(|t| t == "Período: Janeiro - Junho 2025"));
        assert!(doc.texts().any(|t| t == "Gerado em: 01/06/2025"));
    }

    #[test]
    fn test_kpi_values_are_formatted() {
        let doc = build(&spec(0));
        assert!(doc.texts().any(|t| t == "Receita Total:"));
        assert!(doc.texts().any(|t| t == "R$ 328.000,00"));
        assert!(doc.texts().any(|t| t == "R$ 143.000,00"));
        assert!(doc.texts().any(|t| t == "28,5%"));
        assert!(doc.texts().any(|t| t == "85,2%"));
        assert!(doc.texts().any(|t| t == "20"));
    }

    #[test]
    fn test_negative_profit_is_shown_with_sign() {
        let mut s = spec(0);
        s.kpis.net_profit = -500000;
        let doc = build(&s);
        assert!(doc.texts().any(|t| t == "-R$ 5.000,00"));
    }

    #[test]
    fn test_status_rows_show_share_and_count() {
        let doc = build(&spec(0));
        assert!(doc.texts().any(|t| t == "Concluído:"));
        assert!(doc.texts().any(|t| t == "60%"));
        assert!(doc.texts().any(|t| t == "12 produções"));
        assert!(doc.texts().any(|t| t == "1 produções"));
    }

    #[test]
    fn test_status_bars_scale_with_share() {
        let doc = build(&spec(0));
        let widths: Vec<f32> = doc.pages[0]
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::FillRect { rect, color }
                    if rect.h == BAR_H && STATUS_COLORS.contains(color) =>
                {
                    Some(rect.w)
                }
                _ => None,
            })
            .collect();
        assert_eq!(widths, vec![24.0, 10.0, 4.0, 2.0]);
    }

    #[test]
    fn test_clients_are_ranked() {
        let doc = build(&spec(3));
        for rank in ["1.", "2.", "3."] {
            assert!(doc.texts().any(|t| t == rank), "missing {rank}");
        }
        assert!(doc.texts().any(|t| t == "R$ 25.000,00"));
    }

    #[test]
    fn test_no_clients_skips_table() {
        let doc = build(&spec(0));
        assert_eq!(doc.count_blocks(BlockKind::TableHeader), 0);
        assert!(!doc.contains_text("TOP CLIENTES"));
    }

    #[test]
    fn test_many_clients_paginate_with_footer_last() {
        let doc = build(&spec(30));
        assert!(doc.page_count() > 1);
        assert_eq!(doc.count_blocks(BlockKind::TableRow), 30);
        let last = doc.pages.len() - 1;
        for (i, page) in doc.pages.iter().enumerate() {
            assert_eq!(page.count_blocks(BlockKind::Footer), usize::from(i == last));
            for b in page.blocks.iter().filter(|b| b.kind != BlockKind::Footer) {
                assert!(b.bottom() <= BREAK_Y);
            }
        }
    }

    #[test]
    fn test_footer_carries_version_and_timestamp() {
        let doc = build(&spec(1));
        let version = format!("Versão: {VERSION}");
        assert!(doc.texts().any(|t| t == version));
        assert!(doc.texts().any(|t| t == "Gerado em: 01/06/2025 14:05:09"));
        assert!(doc.contains_text("gerado automaticamente"));
    }

    #[test]
    fn test_validation() {
        let mut s = spec(0);
        s.period_start = " ".to_string();
        assert!(matches!(validate(&s), Err(ReportError::Validation(_))));

        let mut s = spec(0);
        s.kpis.costs = -1;
        assert!(matches!(validate(&s), Err(ReportError::Validation(_))));

        let mut s = spec(0);
        s.kpis.completion_rate = 120.0;
        assert!(matches!(validate(&s), Err(ReportError::Validation(_))));

        let mut s = spec(0);
        s.kpis.margin_pct = f64::NAN;
        assert!(matches!(validate(&s), Err(ReportError::Validation(_))));

        let mut s = spec(0);
        s.status.draft = 101;
        assert!(matches!(validate(&s), Err(ReportError::Validation(_))));

        let mut s = spec(1);
        s.top_clients[0].total = -1;
        assert!(matches!(validate(&s), Err(ReportError::Validation(_))));
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn test_write_report_creates_named_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let s = spec(3);
        let path = default_path(dir.path(), &s);
        write_report(&s, &Settings::default(), &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[cfg(not(feature = "pdf"))]
    #[test]
    fn test_generate_without_backend() {
        assert!(matches!(
            generate(&spec(0), &Settings::default()),
            Err(ReportError::MissingRenderer)
        ));
    }
}
