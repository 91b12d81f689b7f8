//! End-to-end command handling against scripted collaborators.

use std::sync::Arc;

use rust_decimal_macros::dec;

use coinwatch::application::dispatch::{
    CommandDispatcher, DispatchLimits, FETCHING_TOP_TEXT, FETCHING_TRENDING_TEXT, HELP_TEXT,
    WELCOME_TEXT,
};
use coinwatch::application::format::{NO_MARKET_DATA, NO_TRENDING_DATA};
use coinwatch::domain::ChatId;
use coinwatch::error::Resource;
use coinwatch::port::outbound::chat::TextFormat;
use coinwatch::testkit::chat::RecordingTransport;
use coinwatch::testkit::domain::{market_entries, market_entry, trending_entry};
use coinwatch::testkit::market::ScriptedMarketData;

const CHAT: ChatId = ChatId::new(4242);

fn dispatcher(
    market: ScriptedMarketData,
) -> (CommandDispatcher, Arc<ScriptedMarketData>, RecordingTransport) {
    let market = Arc::new(market);
    let transport = RecordingTransport::new();
    let dispatcher = CommandDispatcher::new(market.clone(), Arc::new(transport.clone()));
    (dispatcher, market, transport)
}

#[tokio::test]
async fn top_acknowledges_then_sends_one_block_per_entry() {
    let (dispatcher, market, transport) = dispatcher(ScriptedMarketData::new().with_top(vec![
        market_entry("Bitcoin", "btc", dec!(67000), dec!(1320000000000), Some(dec!(1.5))),
        market_entry("Ethereum", "eth", dec!(3500), dec!(420000000000), Some(dec!(-2.25))),
        market_entry("Tether", "usdt", dec!(1), dec!(110000000000), None),
    ]));

    dispatcher.handle_text(CHAT, "/top").await;

    let sent = transport.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].text, FETCHING_TOP_TEXT);
    assert_eq!(sent[0].format, TextFormat::Plain);
    assert_eq!(sent[1].format, TextFormat::Markdown);
    assert!(sent.iter().all(|m| m.chat == CHAT));

    let body = &sent[1].text;
    assert!(body.contains("1. *Bitcoin* (BTC)"));
    assert!(body.contains("2. *Ethereum* (ETH)"));
    assert!(body.contains("3. *Tether* (USDT)"));
    assert!(!body.contains("4. "));
    assert!(body.contains("🔴 2.25%"));

    assert_eq!(market.requests(), vec![(Resource::TopMarkets, 10)]);
}

#[tokio::test]
async fn top_failure_replies_with_error_and_no_entries() {
    let (dispatcher, _, transport) = dispatcher(ScriptedMarketData::new().top_unavailable());

    dispatcher.handle_text(CHAT, "/top").await;

    let sent = transport.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].text, FETCHING_TOP_TEXT);
    assert_eq!(sent[1].text, "Error: Unable to fetch cryptocurrency data");
    assert_eq!(sent[1].format, TextFormat::Plain);
    assert!(!sent[1].text.contains("503"));
}

#[tokio::test]
async fn top_with_empty_listing_sends_sentinel() {
    let (dispatcher, _, transport) = dispatcher(ScriptedMarketData::new());

    dispatcher.handle_text(CHAT, "/top").await;

    assert_eq!(transport.texts(), vec![FETCHING_TOP_TEXT, NO_MARKET_DATA]);
}

#[tokio::test]
async fn hot_requests_five_and_lists_trending() {
    let trending = (1..=7)
        .map(|i| trending_entry(&format!("Hot{i}"), &format!("h{i}"), Some(i * 10), Some(i.into())))
        .collect();
    let (dispatcher, market, transport) =
        dispatcher(ScriptedMarketData::new().with_trending(trending));

    dispatcher.handle_text(CHAT, "/hot").await;

    let sent = transport.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].text, FETCHING_TRENDING_TEXT);
    assert_eq!(sent[1].format, TextFormat::Markdown);
    assert!(sent[1].text.starts_with("🔥 *TRENDING CRYPTOCURRENCIES* 🔥"));
    assert!(sent[1].text.contains("5. *Hot5* (H5)"));
    assert!(!sent[1].text.contains("Hot6"));

    assert_eq!(market.requests(), vec![(Resource::Trending, 5)]);
}

#[tokio::test]
async fn hot_failure_names_trending_resource() {
    let (dispatcher, _, transport) = dispatcher(ScriptedMarketData::new().trending_unavailable());

    dispatcher.handle_text(CHAT, "/hot").await;

    assert_eq!(
        transport.texts(),
        vec![
            FETCHING_TRENDING_TEXT,
            "Error: Unable to fetch trending cryptocurrency data"
        ]
    );
}

#[tokio::test]
async fn hot_with_no_trending_coins_sends_sentinel() {
    let (dispatcher, _, transport) = dispatcher(ScriptedMarketData::new());

    dispatcher.handle_text(CHAT, "/hot").await;

    assert_eq!(transport.texts(), vec![FETCHING_TRENDING_TEXT, NO_TRENDING_DATA]);
}

#[tokio::test]
async fn start_and_help_reply_without_fetching() {
    let (dispatcher, market, transport) = dispatcher(ScriptedMarketData::new());

    dispatcher.handle_text(CHAT, "/start").await;
    dispatcher.handle_text(CHAT, "/help").await;

    assert_eq!(transport.texts(), vec![WELCOME_TEXT, HELP_TEXT]);
    assert!(transport.sent().iter().all(|m| m.format == TextFormat::Plain));
    assert!(market.requests().is_empty());
}

#[tokio::test]
async fn unrecognized_text_gets_no_reply() {
    let (dispatcher, market, transport) = dispatcher(ScriptedMarketData::new());

    for text in ["hello", "", "/unknown", "/topx", "top", "  "] {
        dispatcher.handle_text(CHAT, text).await;
    }

    assert!(transport.is_empty());
    assert!(market.requests().is_empty());
}

#[tokio::test]
async fn addressed_command_with_arguments_is_handled() {
    let (dispatcher, market, transport) =
        dispatcher(ScriptedMarketData::new().with_top(market_entries(2)));

    dispatcher.handle_text(CHAT, "/top@CoinWatchBot 50").await;

    assert_eq!(transport.len(), 2);
    assert_eq!(market.requests(), vec![(Resource::TopMarkets, 10)]);
}

#[tokio::test]
async fn failed_acknowledgement_skips_fetch() {
    let market = Arc::new(ScriptedMarketData::new().with_top(market_entries(3)));
    let dispatcher = CommandDispatcher::new(market.clone(), Arc::new(RecordingTransport::failing()));

    dispatcher.handle_text(CHAT, "/top").await;

    assert!(market.requests().is_empty());
}

#[tokio::test]
async fn configured_limits_reach_provider() {
    let market = Arc::new(ScriptedMarketData::new().with_top(market_entries(30)));
    let transport = RecordingTransport::new();
    let dispatcher = CommandDispatcher::with_limits(
        market.clone(),
        Arc::new(transport.clone()),
        DispatchLimits {
            top: 25,
            trending: 3,
        },
    );

    dispatcher.handle_text(CHAT, "/top").await;
    dispatcher.handle_text(CHAT, "/hot").await;

    assert_eq!(
        market.requests(),
        vec![(Resource::TopMarkets, 25), (Resource::Trending, 3)]
    );
    let texts = transport.texts();
    assert!(texts[1].contains("25. *Coin24*"));
    assert!(!texts[1].contains("Coin25"));
}

#[tokio::test]
async fn concurrent_chats_are_answered_independently() {
    let (dispatcher, _, transport) = dispatcher(
        ScriptedMarketData::new()
            .with_top(market_entries(3))
            .trending_unavailable(),
    );
    let first = ChatId::new(1);
    let second = ChatId::new(2);

    tokio::join!(
        dispatcher.handle_text(first, "/top"),
        dispatcher.handle_text(second, "/hot"),
    );

    let sent = transport.sent();
    let for_chat = |chat: ChatId| {
        sent.iter()
            .filter(|m| m.chat == chat)
            .map(|m| m.text.clone())
            .collect::<Vec<_>>()
    };

    let first_texts = for_chat(first);
    assert_eq!(first_texts.len(), 2);
    assert_eq!(first_texts[0], FETCHING_TOP_TEXT);
    assert!(first_texts[1].contains("3. *Coin2*"));

    assert_eq!(
        for_chat(second),
        vec![
            FETCHING_TRENDING_TEXT.to_string(),
            "Error: Unable to fetch trending cryptocurrency data".to_string()
        ]
    );
}
