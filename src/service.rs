use std::sync::Arc;

use reqwest::Client;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use serde_json::Value;

use crate::constants::{DWD_APP_API_BASE, DWD_STATIC_API_BASE, USER_AGENT};
use crate::error::DwdError;
use crate::models::{GetNowcastWarningsRequest, GetStationDataRequest};

/// Main DWD service that handles MCP requests
#[derive(Clone)]
pub struct DwdWeather {
    client: Arc<Client>,
    app_api_base: String,
    static_api_base: String,
    tool_router: ToolRouter<Self>,
}

impl DwdWeather {
    /// Creates a new DWD service instance
    pub fn new() -> anyhow::Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client: Arc::new(client),
            app_api_base: DWD_APP_API_BASE.to_string(),
            static_api_base: DWD_STATIC_API_BASE.to_string(),
            tool_router: Self::tool_router(),
        })
    }

    /// Makes an HTTP GET request and returns the raw JSON body
    async fn fetch_dwd_data(&self, url: &str) -> Result<Value, DwdError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DwdError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn station_overview_url(&self, request: &GetStationDataRequest) -> String {
        format!(
            "{}/stationOverviewExtended?stationIds={}",
            self.app_api_base,
            request.station_ids.to_query_value()
        )
    }

    fn nowcast_warnings_url(&self, request: &GetNowcastWarningsRequest) -> String {
        format!("{}/{}", self.static_api_base, request.language.nowcast_file())
    }

    /// Wraps an upstream JSON payload as a single pretty-printed text entry
    fn json_tool_result(data: Value) -> Result<CallToolResult, McpError> {
        let text = serde_json::to_string_pretty(&data).map_err(|e| {
            McpError::internal_error(format!("Failed to serialize response: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for DwdWeather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "dwd-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A weather information service powered by the Deutsche Wetterdienst (DWD) API. \
                Provides current station observations and nowcast warnings for Germany."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl DwdWeather {
    /// Gets current observations for one or more DWD weather stations
    #[tool(description = "Get current weather data for specific DWD weather stations")]
    async fn get_station_data(
        &self,
        Parameters(request): Parameters<GetStationDataRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting station data for: {}",
            request.station_ids.to_query_value()
        );

        let url = self.station_overview_url(&request);

        let data = self.fetch_dwd_data(&url).await.map_err(|e| {
            tracing::error!("Station data fetch failed: {}", e);
            McpError::internal_error(format!("Failed to fetch station data: {}", e), None)
        })?;

        Self::json_tool_result(data)
    }

    /// Gets current nowcast weather warnings for Germany
    #[tool(description = "Get current nowcast weather warnings in Germany")]
    async fn get_nowcast_warnings(
        &self,
        Parameters(request): Parameters<GetNowcastWarningsRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting nowcast warnings in language: {}", request.language);

        let url = self.nowcast_warnings_url(&request);

        let data = self.fetch_dwd_data(&url).await.map_err(|e| {
            tracing::error!("Nowcast warnings fetch failed: {}", e);
            McpError::internal_error(format!("Failed to fetch nowcast warnings: {}", e), None)
        })?;

        Self::json_tool_result(data)
    }
}
