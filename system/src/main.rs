mod bonds;
mod config;

use chrono::Utc;
use rust_decimal_macros::dec;
use trsy_booking::{BookingService, TradeFeed};
use trsy_core::{logging, Listener, Service, TrsyError};
use trsy_execution::{AlgoExecutionListener, AlgoExecutionService, ExecutionOrderConnector, ExecutionService, MarketDataListener};
use trsy_historical::{
    ExecutionHistoricalConnector, ExecutionHistoricalListener, InquiryHistoricalConnector, InquiryHistoricalListener,
    PositionHistoricalConnector, PositionHistoricalListener, RiskHistoricalConnector, SectorsRiskJoinListener,
    StreamHistoricalListener, StreamingHistoricalConnector,
};
use trsy_inquiry::{InquiryFeed, InquiryService};
use trsy_marketdata::{MarketDataFeed, MarketDataService};
use trsy_position::{PositionListener, PositionService};
use trsy_pricing::{AlgoStreamListener, AlgoStreamingService, PriceFeed, PriceListener, PriceStreamConnector, StreamingService};
use trsy_risk::{RiskListener, RiskService};

use config::RunConfig;

fn main() -> Result<(), TrsyError> {
    logging::init_logging();
    tracing::info!("treasury trading system starting");

    let config = RunConfig::default();
    std::fs::create_dir_all(&config.output_dir)?;
    std::fs::create_dir_all(config.output_dir.join("Historical"))?;

    let as_of = Utc::now().date_naive();
    let bond_list = bonds::load_bonds(config.input_path("bonds.txt"))?;
    tracing::info!(count = bond_list.len(), "loaded bond reference data");

    let pv01_table: Vec<_> = bond_list
        .iter()
        .map(|bond| (bond.cusip.clone(), bonds::pv01_per_unit(bond, as_of)))
        .collect();
    let (front_end, belly, long_end) = bonds::bucket_sectors(&bond_list, as_of);

    let mut risk_service = RiskService::new(pv01_table, front_end, belly, long_end);

    let risk_historical_connector = RiskHistoricalConnector::new(config.historical_path("risk.txt"));
    let (pv01_join_listener, sectors_join_listener) = SectorsRiskJoinListener::paired(risk_historical_connector);
    risk_service.add_listener(Box::new(pv01_join_listener));
    risk_service.add_sector_listener(Box::new(sectors_join_listener));

    // Demonstrates a live PV01 sensitivity override; done here, before risk_service
    // is handed off into the position-service listener tree below, since the
    // ownership-tree wiring gives nothing else a mutable handle on it afterwards.
    if let Some(third_bond) = bond_list.get(2) {
        risk_service.update_pv01(&third_bond.cusip, dec!(0.03));
    }

    let risk_listener = RiskListener::new(risk_service);

    let mut position_service = PositionService::new();
    position_service.add_listener(Box::new(risk_listener));
    let position_historical_connector = PositionHistoricalConnector::new(config.historical_path("position.txt"));
    position_service.add_listener(Box::new(PositionHistoricalListener::new(position_historical_connector)));

    let position_listener = PositionListener::new(position_service);

    let mut booking_service = BookingService::new();
    booking_service.add_listener(Box::new(position_listener));

    let mut trade_feed = TradeFeed::open(config.input_path("trades.txt"))?;
    for _ in 0..config.trade_count {
        if !trade_feed.pull_into(&mut booking_service) {
            break;
        }
    }
    tracing::info!("trade feed drained");

    let mut algo_streaming_service = AlgoStreamingService::new();

    let streaming_connector = PriceStreamConnector::new(config.output_path("PriceStreams.txt"));
    let mut streaming_service = StreamingService::new(streaming_connector);
    let streaming_historical_connector = StreamingHistoricalConnector::new(config.historical_path("streaming.txt"));
    streaming_service.add_listener(Box::new(StreamHistoricalListener::new(streaming_historical_connector)));

    algo_streaming_service.add_listener(Box::new(AlgoStreamListener::new(streaming_service)));
    let mut price_listener = PriceListener::new(algo_streaming_service);

    let mut price_feed = PriceFeed::open(config.input_path("prices.txt"))?;
    for _ in 0..config.price_count {
        let Some(price) = price_feed.pull() else {
            break;
        };
        price_listener.process_add(&price);
    }
    tracing::info!("price feed drained");

    let execution_connector = ExecutionOrderConnector::new(config.output_path("ExecutionOrders.txt"));
    let mut execution_service = ExecutionService::new(execution_connector);
    let execution_historical_connector = ExecutionHistoricalConnector::new(config.historical_path("executions.txt"));
    execution_service.add_listener(Box::new(ExecutionHistoricalListener::new(execution_historical_connector)));

    let mut algo_execution_service = AlgoExecutionService::new();
    algo_execution_service.add_listener(Box::new(AlgoExecutionListener::new(execution_service)));

    let mut market_data_service = MarketDataService::new();
    market_data_service.add_listener(Box::new(MarketDataListener::new(algo_execution_service)));

    let mut market_data_feed = MarketDataFeed::open(config.input_path("marketdata.txt"))?;
    for _ in 0..config.market_data_count {
        if !market_data_feed.pull_into(&mut market_data_service) {
            break;
        }
    }
    tracing::info!("market data feed drained");

    let mut inquiry_service = InquiryService::new();
    let inquiry_historical_connector = InquiryHistoricalConnector::new(config.historical_path("inquiries.txt"));
    inquiry_service.add_listener(Box::new(InquiryHistoricalListener::new(inquiry_historical_connector)));

    let mut inquiry_feed = InquiryFeed::open(config.input_path("inquiries.txt"))?;
    for _ in 0..config.inquiry_count {
        if !inquiry_feed.pull_into(&mut inquiry_service) {
            break;
        }
    }
    tracing::info!("inquiry feed drained");

    tracing::info!("treasury trading system run complete");
    Ok(())
}
