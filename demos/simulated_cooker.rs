//! Drive a simulated cooker through a start/status/stop cycle
//!
//! Run with: cargo run --example simulated_cooker

use async_trait::async_trait;
use chunmi_cooker::{
    ActionParameter, ActionResponse, Cooker, CookerTransport, PropertyReading, PropertyValue,
    Result, StartOptions,
};

const WHITE_RICE: &str = "0201000000000160001e0100000a00000000010100fc";

/// Answers every call as a cooker midway through a cook cycle would.
struct SimulatedTransport;

#[async_trait]
impl CookerTransport for SimulatedTransport {
    async fn call_action(
        &self,
        action: &str,
        params: Vec<ActionParameter>,
    ) -> Result<ActionResponse> {
        println!("-> {} {:?}", action, params);

        match action {
            "custom:get-temp-history" => Ok(ActionResponse::ok(vec![ActionParameter::new(
                1,
                "161515161c242a3031302f2e",
            )])),
            "cooker:cancel-cooking" => Ok(ActionResponse::failed(-1)),
            _ => Ok(ActionResponse::ok(Vec::new())),
        }
    }

    async fn get_properties_for_mapping(&self) -> Result<Vec<PropertyReading>> {
        Ok(vec![
            PropertyReading::new("status", PropertyValue::Int(2)),
            PropertyReading::new("fault", PropertyValue::Int(0)),
            PropertyReading::new("menu-id", PropertyValue::Int(1)),
            PropertyReading::new("left-time", PropertyValue::Int(1500)),
            PropertyReading::new("pre-left-time", PropertyValue::Int(0)),
            PropertyReading::new("cook-total-time", PropertyValue::Int(2700)),
            PropertyReading::new("auto-keepwarm-flag", PropertyValue::Int(1)),
            PropertyReading::new("rice-type", PropertyValue::Int(1)),
            PropertyReading::new("taste", PropertyValue::Int(1)),
        ])
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cooker = Cooker::new(SimulatedTransport);

    let options = StartOptions {
        duration: Some(chrono::Duration::minutes(45)),
        schedule_at: Some(chrono::Utc::now() + chrono::Duration::hours(2)),
        auto_keep_warm: Some(true),
        taste: Some(2),
    };
    cooker.start(WHITE_RICE, options).await?;

    let status = cooker.status().await?;
    println!("\n{}", status);

    let history = cooker.temperature_history().await?;
    println!("Temperature history: {}\n", history);

    // The simulated cooker rejects the cancel; this only logs a warning
    cooker.stop().await?;

    Ok(())
}
