use serde::{Deserialize, Serialize};

/// The client the budget is addressed to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Party {
    #[serde(alias = "full_name")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, alias = "cnpj")]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductionStatus {
    #[default]
    Draft,
    ProposalSent,
    Approved,
    InProgress,
    Completed,
    Canceled,
    Other(String),
}

impl ProductionStatus {
    pub fn label(&self) -> &str {
        match self {
            ProductionStatus::Draft => "Rascunho",
            ProductionStatus::ProposalSent => "Proposta Enviada",
            ProductionStatus::Approved => "Aprovada",
            ProductionStatus::InProgress => "Em Andamento",
            ProductionStatus::Completed => "Concluída",
            ProductionStatus::Canceled => "Cancelada",
            ProductionStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for ProductionStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "draft" => ProductionStatus::Draft,
            "proposal_sent" => ProductionStatus::ProposalSent,
            "approved" => ProductionStatus::Approved,
            "in_progress" => ProductionStatus::InProgress,
            "completed" => ProductionStatus::Completed,
            "canceled" => ProductionStatus::Canceled,
            _ => ProductionStatus::Other(raw),
        }
    }
}

impl From<ProductionStatus> for String {
    fn from(status: ProductionStatus) -> Self {
        match status {
            ProductionStatus::Draft => "draft".to_string(),
            ProductionStatus::ProposalSent => "proposal_sent".to_string(),
            ProductionStatus::Approved => "approved".to_string(),
            ProductionStatus::InProgress => "in_progress".to_string(),
            ProductionStatus::Completed => "completed".to_string(),
            ProductionStatus::Canceled => "canceled".to_string(),
            ProductionStatus::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductionMeta {
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub status: ProductionStatus,
    pub created_at: String,
    #[serde(default)]
    pub deadline: Option<String>,
}

/// One billed service. `total_price` is computed upstream and shown as given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub id: i64,
    pub service_name: String,
    pub quantity: i64,
    pub unit_price: i64,
    pub total_price: i64,
}

/// Amounts in centavos. `total` already has the discount applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Totals {
    pub total: i64,
    #[serde(default)]
    pub discount: i64,
    #[serde(default)]
    pub tax: i64,
}

impl Totals {
    pub fn subtotal(&self) -> i64 {
        self.total.saturating_add(self.discount)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSpec {
    pub client: Party,
    pub production: ProductionMeta,
    #[serde(default)]
    pub items: Vec<LineItem>,
    pub totals: Totals,
}

// ---------------------------------------------------------------------------
// Executive report
// ---------------------------------------------------------------------------

/// Headline figures for the period. Money in centavos, rates in percent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Kpis {
    #[serde(alias = "receitaTotal")]
    pub revenue: i64,
    #[serde(alias = "custosTotais")]
    pub costs: i64,
    #[serde(alias = "lucroLiquido")]
    pub net_profit: i64,
    #[serde(alias = "margemLucro")]
    pub margin_pct: f64,
    #[serde(alias = "totalProducoes")]
    pub total_productions: u32,
    #[serde(alias = "taxaConclusao")]
    pub completion_rate: f64,
}

/// Share of productions in each status, in whole percent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusBreakdown {
    #[serde(alias = "concluido")]
    pub completed: u32,
    #[serde(alias = "emAndamento")]
    pub in_progress: u32,
    #[serde(alias = "aprovado")]
    pub approved: u32,
    #[serde(alias = "rascunho")]
    pub draft: u32,
}

impl StatusBreakdown {
    /// Label and percentage per status, in display order.
    pub fn entries(&self) -> [(&'static str, u32); 4] {
        [
            ("Concluído", self.completed),
            ("Em Andamento", self.in_progress),
            ("Aprovado", self.approved),
            ("Rascunho", self.draft),
        ]
    }

    /// Productions represented by `pct` percent of `total`, rounded half up.
    pub fn count(total: u32, pct: u32) -> u64 {
        (u64::from(total) * u64::from(pct) + 50) / 100
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopClient {
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(alias = "producoes")]
    pub productions: u32,
    #[serde(alias = "valor")]
    pub total: i64,
}

/// Input for the executive summary of a period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutiveSpec {
    #[serde(alias = "periodoInicio")]
    pub period_start: String,
    #[serde(alias = "periodoFim")]
    pub period_end: String,
    #[serde(alias = "ano")]
    pub year: i32,
    pub kpis: Kpis,
    #[serde(alias = "statusProducoes")]
    pub status: StatusBreakdown,
    #[serde(default, alias = "topClientes")]
    pub top_clients: Vec<TopClient>,
}
