//! Freighter Wallet Integration via wasm-bindgen
//!
//! Bridges the Freighter browser extension (`window.freighterApi`) to the
//! [`WalletCapability`] seam of the controller. Both the promise-of-object
//! responses of current Freighter releases and the bare booleans of older
//! ones are accepted.

use async_trait::async_trait;
use lib_core::{WalletCapability, WalletError};
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// ============================================================================
// FREIGHTER BINDINGS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
function freighter() {
    return window.freighterApi || null;
}

function failure(result) {
    if (result && result.error) {
        const error = result.error;
        throw new Error(error.message || String(error));
    }
}

export async function freighterIsConnected() {
    const api = freighter();
    if (!api) {
        return false;
    }
    try {
        const result = await api.isConnected();
        if (typeof result === 'boolean') {
            return result;
        }
        return !!(result && result.isConnected);
    } catch (error) {
        return false;
    }
}

export async function freighterRequestAccess() {
    const api = freighter();
    if (!api) {
        throw new Error('Freighter not found');
    }
    const result = await api.requestAccess();
    failure(result);
    return result;
}

export async function freighterGetAddress() {
    const api = freighter();
    if (!api) {
        throw new Error('Freighter not found');
    }
    const result = await (api.getAddress ? api.getAddress() : api.getPublicKey());
    failure(result);
    if (typeof result === 'string') {
        return { address: result };
    }
    return { address: (result && result.address) || '' };
}
")]
extern "C" {
    /// Whether the extension is installed and reachable
    async fn freighterIsConnected() -> JsValue;

    /// Ask the operator to grant this page access
    #[wasm_bindgen(catch)]
    async fn freighterRequestAccess() -> Result<JsValue, JsValue>;

    /// Read the active account address
    #[wasm_bindgen(catch)]
    async fn freighterGetAddress() -> Result<JsValue, JsValue>;
}

#[derive(Debug, Deserialize)]
struct AddressResponse {
    address: String,
}

/// Extract a readable message from a rejected promise value.
fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

/// Freighter-backed wallet capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreighterWallet;

impl FreighterWallet {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl WalletCapability for FreighterWallet {
    async fn is_available(&self) -> bool {
        freighterIsConnected().await.as_bool().unwrap_or(false)
    }

    async fn request_authorization(&self) -> Result<(), WalletError> {
        freighterRequestAccess()
            .await
            .map(|_| ())
            .map_err(|e| WalletError::AuthorizationDenied(js_error_message(&e)))
    }

    async fn get_address(&self) -> Result<String, WalletError> {
        let value = freighterGetAddress()
            .await
            .map_err(|e| WalletError::Read(js_error_message(&e)))?;

        let response: AddressResponse = serde_wasm_bindgen::from_value(value)
            .map_err(|e| WalletError::Read(e.to_string()))?;

        if response.address.is_empty() {
            return Err(WalletError::Read(
                "Freighter returned an empty address".to_string(),
            ));
        }
        log::debug!("Freighter address read: {}", shared::truncate_address(&response.address));
        Ok(response.address)
    }
}
