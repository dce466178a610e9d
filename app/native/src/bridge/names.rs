// Also compiled into build.rs through `include!`, so this file must stay
// free of crate paths and inner attributes.

/// Commands the webview may invoke, in `BridgeMethod` declaration order.
pub const BRIDGE_COMMANDS: &[&str] = &[
    "read_notes",
    "write_notes",
    "set_window_size",
    "set_window_position",
    "get_window_position",
    "focus_window",
];
