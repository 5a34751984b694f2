use verba::verba_client::VerbaClient;
use verba::AddRequest;

pub mod verba {
    tonic::include_proto!("verba");
}

const WORDS: [&str; 8] = [
    "Gravity", "gravity", "word", "words", "ё", "Ё", "verba", "word",
];

#[tokio::main]
async fn main() {
    // Calculate time taken.
    let now: u128 = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis();

    let mut client = VerbaClient::connect("http://localhost:50051")
        .await
        .unwrap();

    for word in WORDS {
        let _ = client
            .add(AddRequest {
                word: Some(word.to_string()),
            })
            .await
            .unwrap()
            .into_inner();
    }

    println!(
        "Set in {}ms",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("Time went backwards")
            .as_millis()
            - now
    );
}
