mod common;

use common::draft;
use tradedesk::TradeDesk;

#[test]
fn test_trades_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("journal.db");
    let path = db_path.to_str().unwrap();

    let id = {
        let desk = TradeDesk::new(path).unwrap();
        desk.trade_add("ana", draft("2024-06-03", "XAUUSD", 100.0))
            .unwrap()
            .id
    };

    let desk = TradeDesk::new(path).unwrap();
    let trade = desk.trade_get(&id).unwrap().unwrap();
    assert_eq!(trade.asset, "XAUUSD");
    assert_eq!(trade.owner_id, "ana");
    assert_eq!(trade.profit_loss, 100.0);
}
