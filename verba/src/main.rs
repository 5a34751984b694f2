#![forbid(unsafe_code)]

mod helpers;
mod models;

use std::sync::Arc;
use tokio::sync::RwLock;
use tonic::{transport::Server, Request, Response, Status};
use tracing::{error, info, Level};
use tracing_subscriber::fmt;
use verba_stats::collector::WordsStatistics;

use verba::{
    verba_server::{Verba, VerbaServer},
    {AddRequest, Ranking, StatisticsRequest, Void, Word},
};

pub mod verba {
    tonic::include_proto!("verba");
}

struct SuperVerba {
    collector: Arc<RwLock<WordsStatistics>>,
}

#[tonic::async_trait]
impl Verba for SuperVerba {
    async fn add(
        &self,
        request: Request<AddRequest>,
    ) -> Result<Response<Void>, Status> {
        let data = request.into_inner();

        helpers::store::add(Arc::clone(&self.collector), data.word.as_deref())
            .await
            .map_err(|error| {
                error!("Failed to add word: {}", error);
                Status::invalid_argument("a word must be supplied")
            })?;

        Ok(Response::new(Void {}))
    }

    async fn statistics(
        &self,
        request: Request<StatisticsRequest>,
    ) -> Result<Response<Ranking>, Status> {
        Ok(Response::new(Ranking {
            words: helpers::store::snapshot(
                Arc::clone(&self.collector),
                request.into_inner().limit as usize,
            )
            .await
            .iter()
            .map(|(occurrence, word)| Word {
                word: word.to_string(),
                occurrence: (*occurrence).try_into().unwrap_or_default(),
            })
            .collect::<Vec<_>>(),
        }))
    }
}

#[tokio::main]
async fn main() {
    #[cfg(not(debug_assertions))]
    fmt()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_max_level(Level::INFO)
        .init();

    #[cfg(debug_assertions)]
    fmt()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_max_level(Level::TRACE)
        .init();

    let config = helpers::config::read().unwrap_or_else(|error| {
        info!("No configuration loaded, using defaults: {}", error);
        models::config::Config::default()
    });

    let collector = Arc::new(RwLock::new(WordsStatistics::new()));

    let addr = format!("0.0.0.0:{}", config.port.unwrap_or(50051))
        .parse()
        .unwrap();

    info!("Server started on {}", addr);

    Server::builder()
        .add_service(VerbaServer::new(SuperVerba { collector }))
        .serve(addr)
        .await
        .unwrap();
}
