use anyhow::Result;

use osmosis_fusion::settings::Settings;

const SETTINGS_PATH: &str = "Settings.toml";

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("osmosis_fusion=info")
        .try_init();

    let settings = Settings::from_toml(SETTINGS_PATH)?;
    let order_settings = settings
        .order
        .ok_or_else(|| anyhow::anyhow!("No [order] section in {SETTINGS_PATH}"))?;

    let order = order_settings.to_order()?;
    let order_hash = order.order_hash(order_settings.src_chain_id);
    tracing::info!(order_hash = %order_hash, src_chain_id = %order_settings.src_chain_id, "Built order");

    let message = order
        .to_cosmos_msg()?
        .with_contract(&settings.factory.contract_address);
    let create_escrow: serde_json::Value = serde_json::from_slice(&message.value.msg)?;

    let output = serde_json::json!({
        "orderHash": order_hash,
        "order": order.to_json(),
        "typeUrl": message.type_url,
        "contract": message.value.contract,
        "sender": message.value.sender,
        "msg": create_escrow,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
