//! Quickstart: one federation, a few participants, one aggregation round

use ledger_fl::simulation::LocalTrainer;
use ledger_fl::{Federation, FederationConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("Ledger-FL Quickstart Demo\n");

    let fed = Federation::bootstrap(FederationConfig::default()).unwrap();
    let trainer = LocalTrainer::new(fed.config().model_dim);

    let credential = fed.issue_credential("Alice");
    println!("Minted credential: {}", credential.token_id);
    println!("   Verifies: {}\n", fed.verify_credential(&credential));

    for participant in ["Alice", "Bob", "Carol"] {
        fed.authenticate(participant);
        let update = trainer.prepare_model_update(participant);
        fed.submit(participant, update);
    }
    println!("Unauthenticated submission accepted: {}", fed.submit("Mallory", vec![1.0; 10]));
    println!("Ledger length: {}", fed.ledger_len());
    println!("Ledger valid: {}\n", fed.validate());

    let outcome = fed.run_round().unwrap();
    println!("Round {} aggregate: {:?}", outcome.round, outcome.model.weights());
    println!(
        "   Max drift {:.4}, within tolerance: {}",
        outcome.max_drift, outcome.within_tolerance
    );
}
