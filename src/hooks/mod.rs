// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git hooks management.

mod manager;

pub use manager::{HookManager, HookStatus, HOOK_NAME};
