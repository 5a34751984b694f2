use verba::verba_client::VerbaClient;
use verba::StatisticsRequest;

pub mod verba {
    tonic::include_proto!("verba");
}

#[tokio::main]
async fn main() {
    // Calculate time taken.
    let now: u128 = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis();

    let ranking = VerbaClient::connect("http://localhost:50051")
        .await
        .unwrap()
        .statistics(StatisticsRequest { limit: 0 })
        .await
        .unwrap()
        .into_inner();

    for word in ranking.words {
        println!("{:>6}  {}", word.occurrence, word.word);
    }

    println!(
        "Received in {}ms",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("Time went backwards")
            .as_millis()
            - now
    );
}
