use enmascara::bank::{self, Bban, Iban};
use enmascara::national_id::{NationalId, NationalIdKind};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    let mut rng = StdRng::seed_from_u64(2024);

    // ── 1. Masked bank accounts ──────────────────────────────────────
    println!("=== IBAN ===");
    for _ in 0..3 {
        let entry = bank::random_bank(&mut rng);
        let iban = Iban::generate_with_rng(&mut rng, entry.code(), "0001", None)
            .expect("registered bank codes always generate");
        println!(
            "  {}  {} ({})",
            iban.formatted(),
            entry.name(),
            entry.bic().unwrap_or("no BIC")
        );
    }

    println!("\n=== BBAN ===");
    let bban = Bban::generate_with_rng(&mut rng, "2100", "0418", None)
        .expect("CaixaBank is registered");
    println!("  {}", bban.formatted());

    // ── 2. Masked identity numbers ───────────────────────────────────
    println!("\n=== DNI / NIE ===");
    for kind in [NationalIdKind::National, NationalIdKind::Foreign] {
        let id = NationalId::generate_with_rng(&mut rng, Some(kind));
        println!("  {kind}: {id}");
    }

    // ── 3. Validation errors ─────────────────────────────────────────
    println!("\n=== Validation ===");
    for code in ["ES9121000418450200051332", "ES9021000418450200051332", "ES91"] {
        match Iban::validate(code) {
            Ok(iban) => println!("  {code}: valid ({})", iban.bic().unwrap_or("-")),
            Err(err) => println!("  {code}: {err}"),
        }
    }
}
