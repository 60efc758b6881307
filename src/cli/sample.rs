use safetasks_budget::models::{Kpis, StatusBreakdown, TopClient};
use safetasks_budget::{
    ExecutiveSpec, LineItem, Party, ProductionMeta, ProductionStatus, ReportSpec, Totals,
};

fn item(id: i64, service_name: &str, quantity: i64, unit_price: i64) -> LineItem {
    LineItem {
        id,
        service_name: service_name.to_string(),
        quantity,
        unit_price,
        total_price: quantity * unit_price,
    }
}

pub fn sample_spec() -> ReportSpec {
    let items = vec![
        item(1, "Diária de filmagem", 2, 350000),
        item(2, "Edição e finalização", 1, 280000),
        item(3, "Drone com operador", 1, 120000),
        item(4, "Trilha sonora licenciada", 1, 45000),
    ];
    let subtotal: i64 = items.iter().map(|i| i.total_price).sum();
    let discount = 50000;
    let tax = 0;

    ReportSpec {
        client: Party {
            name: "Produtora Aurora Ltda".to_string(),
            email: Some("contato@aurora.com.br".to_string()),
            phone: Some("(11) 98765-4321".to_string()),
            tax_id: Some("12.345.678/0001-90".to_string()),
            address: None,
        },
        production: ProductionMeta {
            id: Some(42),
            title: "Vídeo institucional 2025".to_string(),
            status: ProductionStatus::ProposalSent,
            created_at: "2025-05-20T10:00:00".to_string(),
            deadline: Some("2025-07-15".to_string()),
        },
        items,
        totals: Totals {
            total: subtotal - discount,
            discount,
            tax,
        },
    }
}

fn client(name: &str, productions: u32, total: i64) -> TopClient {
    TopClient {
        name: name.to_string(),
        productions,
        total,
    }
}

pub fn sample_executive() -> ExecutiveSpec {
    ExecutiveSpec {
        period_start: "Janeiro".to_string(),
        period_end: "Junho".to_string(),
        year: 2025,
        kpis: Kpis {
            revenue: 32800000,
            costs: 18500000,
            net_profit: 14300000,
            margin_pct: 43.6,
            total_productions: 20,
            completion_rate: 85.0,
        },
        status: StatusBreakdown {
            completed: 60,
            in_progress: 25,
            approved: 10,
            draft: 5,
        },
        top_clients: vec![
            client("Produtora Aurora Ltda", 3, 2500000),
            client("Canal Horizonte", 2, 2200000),
            client("Estúdio Farol", 2, 1800000),
        ],
    }
}

pub fn run(executive: bool) -> anyhow::Result<()> {
    let json = if executive {
        serde_json::to_string_pretty(&sample_executive())?
    } else {
        serde_json::to_string_pretty(&sample_spec())?
    };
    println!("{json}");
    Ok(())
}
