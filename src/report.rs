use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::canvas::{BlockKind, Canvas, Document, BRAND_GREEN};
use crate::error::{ReportError, Result};
use crate::fmt::{date_br, money, parse_timestamp, timestamp_br, zero_pad};
use crate::models::{Party, ProductionMeta, ReportSpec, Totals};
use crate::renderer;
use crate::sections::{self, BoxLine, INFO_BOX, TOTALS_BOX};
use crate::settings::Settings;
use crate::table;

pub const TITLE_CAPTION: &str = "ORÇAMENTO DE PRODUÇÃO AUDIOVISUAL";

const CONDITIONS: [&str; 5] = [
    "• Os valores apresentados não incluem eventuais deslocamentos ou hospedagens.",
    "• O início dos trabalhos está sujeito à confirmação e assinatura do contrato.",
    "• Alterações no escopo podem impactar os valores finais.",
    "• Pagamento: 50% entrada + 50% conclusão.",
    "• Prazo de entrega: conforme especificado no projeto.",
];

pub fn report_id(production_id: u64) -> String {
    format!("FTV-{}", zero_pad(production_id, 4))
}

pub fn file_name(production_id: u64) -> String {
    format!("orcamento-ftv-{}.pdf", zero_pad(production_id, 4))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn invalid(msg: String) -> ReportError {
    ReportError::Validation(msg)
}

fn production_id(spec: &ReportSpec) -> Result<u64> {
    spec.production
        .id
        .ok_or_else(|| invalid("production id is missing".to_string()))
}

fn parse_field(name: &str, raw: &str) -> Result<NaiveDateTime> {
    parse_timestamp(raw).ok_or_else(|| invalid(format!("{name} is not a valid date: {raw:?}")))
}

/// Reject specs that cannot be laid out. Runs before anything is drawn.
pub fn validate(spec: &ReportSpec) -> Result<()> {
    production_id(spec)?;
    parse_field("created_at", &spec.production.created_at)?;
    if let Some(deadline) = &spec.production.deadline {
        parse_field("deadline", deadline)?;
    }

    for (i, item) in spec.items.iter().enumerate() {
        let label = format!("item {} ({:?})", i + 1, item.service_name);
        if item.quantity <= 0 {
            let msg = format!("{label}: quantity must be positive, got {}", item.quantity);
            return Err(invalid(msg));
        }
        if item.unit_price < 0 {
            return Err(invalid(format!("{label}: unit price is negative")));
        }
        if item.total_price < 0 {
            return Err(invalid(format!("{label}: total price is negative")));
        }
    }

    let Totals {
        total,
        discount,
        tax,
    } = spec.totals;
    for (name, value) in [("total", total), ("discount", discount), ("tax", tax)] {
        if value < 0 {
            return Err(invalid(format!("{name} is negative")));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

fn conditions(settings: &Settings) -> Vec<String> {
    let mut lines = vec![format!(
        "• Este orçamento tem validade de {} dias a partir da data de emissão.",
        settings.validity_days
    )];
    lines.extend(CONDITIONS.iter().map(|c| c.to_string()));
    lines
}

fn client_lines(client: &Party) -> Vec<BoxLine> {
    let mut lines = vec![BoxLine::plain(format!("Nome: {}", client.name))];
    let optional = [
        ("Email", &client.email),
        ("Telefone", &client.phone),
        ("CNPJ", &client.tax_id),
        ("Endereço", &client.address),
    ];
    for (label, value) in optional {
        if let Some(v) = value.as_deref().filter(|v| !v.trim().is_empty()) {
            lines.push(BoxLine::plain(format!("{label}: {v}")));
        }
    }
    lines
}

fn production_lines(
    production: &ProductionMeta,
    deadline: Option<NaiveDateTime>,
) -> Vec<BoxLine> {
    let mut lines = vec![
        BoxLine::plain(format!("Título: {}", production.title)),
        BoxLine::plain(format!("Status: {}", production.status.label())),
    ];
    if let Some(deadline) = deadline {
        lines.push(BoxLine::plain(format!("Prazo: {}", date_br(&deadline))));
    }
    lines
}

fn totals_lines(totals: &Totals) -> Vec<BoxLine> {
    let mut lines = vec![BoxLine::plain(format!("Subtotal: {}", money(totals.subtotal())))];
    if totals.discount > 0 {
        lines.push(BoxLine::plain(format!("Desconto: -{}", money(totals.discount))));
    }
    if totals.tax > 0 {
        lines.push(BoxLine::plain(format!("Imposto: +{}", money(totals.tax))));
    }
    lines.push(BoxLine::bold(format!("TOTAL: {}", money(totals.total))));
    lines
}

/// Validate and lay out the whole budget. Deterministic for a given
/// `generated_at`.
pub fn layout(
    spec: &ReportSpec,
    settings: &Settings,
    generated_at: NaiveDateTime,
) -> Result<Document> {
    validate(spec)?;
    let id = production_id(spec)?;
    let created = parse_field("created_at", &spec.production.created_at)?;
    let deadline = spec
        .production
        .deadline
        .as_deref()
        .map(|d| parse_field("deadline", d))
        .transpose()?;

    let mut canvas = Canvas::new(&format!("Orçamento {}", report_id(id)));

    let subtitle = format!("ORÇAMENTO #{}", report_id(id));
    sections::header(&mut canvas, BRAND_GREEN, &settings.brand_name, &subtitle);
    sections::issue_line(
        &mut canvas,
        &format!("Data: {}", date_br(&created)),
        &settings.validity_statement(),
    );
    sections::banner(&mut canvas, BlockKind::Title, TITLE_CAPTION, BRAND_GREEN);
    sections::content_box(
        &mut canvas,
        BlockKind::ClientInfo,
        Some("DADOS DO CLIENTE"),
        &client_lines(&spec.client),
        INFO_BOX,
    );
    sections::content_box(
        &mut canvas,
        BlockKind::ProductionInfo,
        Some("DETALHES DA PRODUÇÃO"),
        &production_lines(&spec.production, deadline),
        INFO_BOX,
    );
    table::render_items(&mut canvas, "ITENS E SERVIÇOS", &spec.items);
    sections::content_box(
        &mut canvas,
        BlockKind::Totals,
        Some("TOTAIS"),
        &totals_lines(&spec.totals),
        TOTALS_BOX,
    );
    let conditions = conditions(settings);
    let conditions: Vec<&str> = conditions.iter().map(String::as_str).collect();
    sections::text_lines(&mut canvas, "CONDIÇÕES E OBSERVAÇÕES", &conditions);
    let generated = format!("Orçamento gerado em: {}", timestamp_br(&generated_at));
    let footer = [settings.footer_tagline.as_str(), generated.as_str()];
    sections::footer(&mut canvas, &footer, &[]);

    Ok(canvas.finish())
}

/// Build the budget PDF in memory. Either the full byte buffer comes back
/// or an error does; nothing is written anywhere.
pub fn generate(spec: &ReportSpec, settings: &Settings) -> Result<Vec<u8>> {
    renderer::ensure_available()?;
    let now = chrono::Local::now().naive_local();
    let doc = layout(spec, settings, now)?;
    let bytes = renderer::render(&doc)?;
    log::info!(
        "generated budget {} ({} page(s))",
        report_id(production_id(spec)?),
        doc.page_count()
    );
    Ok(bytes)
}

/// Default destination: `<dir>/orcamento-ftv-NNNN.pdf`.
pub fn default_path(dir: &Path, spec: &ReportSpec) -> Result<PathBuf> {
    Ok(dir.join(file_name(production_id(spec)?)))
}

/// Generate and write the budget to `path`. The bytes go to a temporary
/// sibling first and are renamed into place, so a failed write never leaves
/// a truncated PDF behind.
pub fn write_report(spec: &ReportSpec, settings: &Settings, path: &Path) -> Result<()> {
    let bytes = generate(spec, settings)?;
    write_atomic(path, &bytes)
}

/// Write `bytes` to `<path>.part`, then rename it over `path`. The temp
/// file is removed again if either step fails.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".part");
    let tmp = PathBuf::from(tmp);
    if let Err(e) = std::fs::write(&tmp, bytes).and_then(|_| std::fs::rename(&tmp, path)) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.into());
    }
    log::info!("wrote {}", path.display());
    Ok(())
}
