use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;

fn cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("HOME", home);
    cmd
}

const ONE_ITEM: &str = r#"{
    "client": {"name": "Produtora Aurora"},
    "production": {"id": 42, "title": "Institucional", "status": "approved",
                   "created_at": "2025-05-20T10:00:00"},
    "items": [{"id": 1, "service_name": "Filmagem", "quantity": 1,
               "unit_price": 500000, "total_price": 500000}],
    "totals": {"total": 500000, "discount": 0, "tax": 0}
}"#;

fn write_spec(dir: &Path, json: &str) -> String {
    let path = dir.join("spec.json");
    std::fs::write(&path, json).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn sample_prints_spec_json() {
    let home = tempfile::tempdir().unwrap();
    cmd(home.path())
        .arg("sample")
        .assert()
        .success()
        .stdout(contains("\"id\": 42"))
        .stdout(contains("proposal_sent"));
}

#[test]
fn check_reports_single_page() {
    let home = tempfile::tempdir().unwrap();
    let spec = write_spec(home.path(), ONE_ITEM);
    cmd(home.path())
        .args(["check", &spec])
        .assert()
        .success()
        .stdout(contains("FTV-0042"))
        .stdout(contains("orcamento-ftv-0042.pdf"))
        .stdout(contains("Items:   1"))
        .stdout(contains("Pages:   1"));
}

#[test]
fn check_rejects_negative_price() {
    let home = tempfile::tempdir().unwrap();
    let json = ONE_ITEM.replace("\"unit_price\": 500000", "\"unit_price\": -1");
    let spec = write_spec(home.path(), &json);
    cmd(home.path())
        .args(["check", &spec])
        .assert()
        .failure()
        .stderr(contains("Invalid report"));
}

#[test]
fn missing_input_fails_with_path() {
    let home = tempfile::tempdir().unwrap();
    cmd(home.path())
        .args(["check", "/nonexistent/spec.json"])
        .assert()
        .failure()
        .stderr(contains("reading /nonexistent/spec.json"));
}

#[test]
fn malformed_json_is_input_error() {
    let home = tempfile::tempdir().unwrap();
    let spec = write_spec(home.path(), "{\"client\": ");
    cmd(home.path())
        .args(["check", &spec])
        .assert()
        .failure()
        .stderr(contains("Invalid input"));
}

#[cfg(feature = "pdf")]
#[test]
fn generate_writes_default_file_name() {
    let home = tempfile::tempdir().unwrap();
    let out = home.path().join("out");
    let spec = write_spec(home.path(), ONE_ITEM);
    cmd(home.path())
        .args(["generate", &spec, "--output-dir", &out.to_string_lossy()])
        .assert()
        .success()
        .stdout(contains("Wrote"));
    let bytes = std::fs::read(out.join("orcamento-ftv-0042.pdf")).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[cfg(feature = "pdf")]
#[test]
fn generate_honours_explicit_output() {
    let home = tempfile::tempdir().unwrap();
    let target = home.path().join("budget.pdf");
    let spec = write_spec(home.path(), ONE_ITEM);
    cmd(home.path())
        .args(["generate", &spec, "--output", &target.to_string_lossy()])
        .assert()
        .success();
    assert!(target.exists());
}

#[test]
fn generate_invalid_spec_leaves_no_file() {
    let home = tempfile::tempdir().unwrap();
    let out = home.path().join("out");
    let spec = write_spec(home.path(), &ONE_ITEM.replace("\"id\": 42, ", ""));
    cmd(home.path())
        .args(["generate", &spec, "--output-dir", &out.to_string_lossy()])
        .assert()
        .failure();
    assert!(!out.exists());
}

#[test]
fn status_shows_defaults() {
    let home = tempfile::tempdir().unwrap();
    cmd(home.path())
        .arg("status")
        .assert()
        .success()
        .stdout(contains("SAFE TASKS"))
        .stdout(contains("not found, using defaults"))
        .stdout(contains("Renderer:"));
}

#[cfg(not(feature = "pdf"))]
#[test]
fn missing_backend_warns_on_stderr() {
    let home = tempfile::tempdir().unwrap();
    cmd(home.path())
        .arg("status")
        .assert()
        .success()
        .stderr(contains("Warning:"))
        .stderr(contains("without the `pdf` feature"));
}

#[cfg(feature = "pdf")]
#[test]
fn full_build_prints_no_warning() {
    let home = tempfile::tempdir().unwrap();
    cmd(home.path())
        .arg("status")
        .assert()
        .success()
        .stderr(predicates::str::is_empty());
}

#[test]
fn sample_executive_prints_period_json() {
    let home = tempfile::tempdir().unwrap();
    cmd(home.path())
        .args(["sample", "--executive"])
        .assert()
        .success()
        .stdout(contains("\"period_start\": \"Janeiro\""))
        .stdout(contains("top_clients"));
}

const EXECUTIVE: &str = r#"{
    "periodoInicio": "Janeiro", "periodoFim": "Junho", "ano": 2025,
    "kpis": {"receitaTotal": 328000, "custosTotais": 185000, "lucroLiquido": 143000,
             "margemLucro": 43.6, "totalProducoes": 20, "taxaConclusao": 85.0},
    "statusProducoes": {"concluido": 60, "emAndamento": 25, "aprovado": 10, "rascunho": 5},
    "topClientes": [{"nome": "Cliente A", "producoes": 3, "valor": 25000}]
}"#;

#[cfg(feature = "pdf")]
#[test]
fn executive_writes_period_file_name() {
    let home = tempfile::tempdir().unwrap();
    let out = home.path().join("out");
    let input = write_spec(home.path(), EXECUTIVE);
    cmd(home.path())
        .args(["executive", &input, "--output-dir", &out.to_string_lossy()])
        .assert()
        .success()
        .stdout(contains("relatorio-executivo-fva-janeiro_junho_2025.pdf"));
    let bytes = std::fs::read(out.join("relatorio-executivo-fva-janeiro_junho_2025.pdf")).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[cfg(feature = "pdf")]
#[test]
fn executive_rejects_out_of_range_share() {
    let home = tempfile::tempdir().unwrap();
    let out = home.path().join("out");
    let input = write_spec(home.path(), &EXECUTIVE.replace("\"rascunho\": 5", "\"rascunho\": 150"));
    cmd(home.path())
        .args(["executive", &input, "--output-dir", &out.to_string_lossy()])
        .assert()
        .failure()
        .stderr(contains("Invalid report"));
    assert!(!out.exists());
}
