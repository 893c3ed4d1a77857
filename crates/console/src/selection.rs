//! Impersonated seller selection.
//!
//! Super admins may pick a seller to view the console as; sellers are pinned
//! to themselves; every other role has no selection at all.

use tracing::{debug, warn};

use atelier_auth::CapabilitySet;
use atelier_core::SellerId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SellerSelection {
    current: Option<SellerId>,
    switchable: bool,
}

impl SellerSelection {
    /// Initial selection for a freshly derived capability set.
    pub fn for_capabilities(caps: &CapabilitySet) -> Self {
        if caps.can_switch_seller {
            return Self {
                current: None,
                switchable: true,
            };
        }
        if caps.is_seller {
            return Self {
                current: caps.seller_id.clone(),
                switchable: false,
            };
        }
        Self::default()
    }

    pub fn current(&self) -> Option<&SellerId> {
        self.current.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    pub fn is_switchable(&self) -> bool {
        self.switchable
    }

    /// Select `seller_id`; an empty string clears back to the platform view.
    ///
    /// Returns `false` without changing anything when the selection is pinned
    /// or the id is malformed.
    pub fn set_seller_id(&mut self, seller_id: &str) -> bool {
        if !self.switchable {
            warn!(seller = seller_id, "seller selection is not switchable for this user");
            return false;
        }

        if seller_id.trim().is_empty() {
            debug!("seller selection cleared");
            self.current = None;
            return true;
        }

        match SellerId::parse(seller_id) {
            Ok(id) => {
                debug!(seller = %id, "seller selected");
                self.current = Some(id);
                true
            }
            Err(err) => {
                warn!(error = %err, "rejected seller selection");
                false
            }
        }
    }

    pub fn clear(&mut self) -> bool {
        self.set_seller_id("")
    }
}
