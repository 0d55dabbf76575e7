//! Operation descriptors — static bindings from device capability to the
//! Termux:API tool that serves it.

/// Expected output shape of a dispatched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputShape {
    /// The tool prints a JSON document on stdout.
    JsonText,
    /// The tool writes a file named by an argument; stdout is unused.
    BinaryFile,
    /// The tool performs an action and prints nothing.
    None,
}

/// Static binding from a capability to an external tool.
///
/// Built once at compile time; per-request parameters are appended as
/// discrete arguments at dispatch, never substituted into a shell string.
#[derive(Debug, Clone, Copy)]
pub struct OpDescriptor {
    pub name: &'static str,
    pub program: &'static str,
    pub shape: OutputShape,
}

pub const BATTERY_STATUS: OpDescriptor = OpDescriptor {
    name: "battery-status",
    program: "termux-battery-status",
    shape: OutputShape::JsonText,
};

pub const SET_BRIGHTNESS: OpDescriptor = OpDescriptor {
    name: "set-brightness",
    program: "termux-brightness",
    shape: OutputShape::None,
};

pub const VIBRATE: OpDescriptor = OpDescriptor {
    name: "vibrate",
    program: "termux-vibrate",
    shape: OutputShape::None,
};

pub const VOLUME_INFO: OpDescriptor = OpDescriptor {
    name: "volume-info",
    program: "termux-volume",
    shape: OutputShape::JsonText,
};

pub const SET_VOLUME: OpDescriptor = OpDescriptor {
    name: "set-volume",
    program: "termux-volume",
    shape: OutputShape::None,
};

pub const NOTIFICATION_LIST: OpDescriptor = OpDescriptor {
    name: "notification-list",
    program: "termux-notification-list",
    shape: OutputShape::JsonText,
};

pub const CALL_LOG: OpDescriptor = OpDescriptor {
    name: "call-log",
    program: "termux-call-log",
    shape: OutputShape::JsonText,
};

pub const CONTACT_LIST: OpDescriptor = OpDescriptor {
    name: "contact-list",
    program: "termux-contact-list",
    shape: OutputShape::JsonText,
};

pub const SMS_LIST: OpDescriptor = OpDescriptor {
    name: "sms-list",
    program: "termux-sms-list",
    shape: OutputShape::JsonText,
};

pub const SMS_SEND: OpDescriptor = OpDescriptor {
    name: "sms-send",
    program: "termux-sms-send",
    shape: OutputShape::None,
};

pub const CAMERA_INFO: OpDescriptor = OpDescriptor {
    name: "camera-info",
    program: "termux-camera-info",
    shape: OutputShape::JsonText,
};

pub const CAMERA_PHOTO: OpDescriptor = OpDescriptor {
    name: "camera-photo",
    program: "termux-camera-photo",
    shape: OutputShape::BinaryFile,
};

pub const CELL_INFO: OpDescriptor = OpDescriptor {
    name: "cell-info",
    program: "termux-telephony-cellinfo",
    shape: OutputShape::JsonText,
};

pub const DEVICE_INFO: OpDescriptor = OpDescriptor {
    name: "device-info",
    program: "termux-telephony-deviceinfo",
    shape: OutputShape::JsonText,
};

pub const WIFI_CONNECTION_INFO: OpDescriptor = OpDescriptor {
    name: "wifi-connection-info",
    program: "termux-wifi-connectioninfo",
    shape: OutputShape::JsonText,
};

pub const WIFI_SCAN_INFO: OpDescriptor = OpDescriptor {
    name: "wifi-scan-info",
    program: "termux-wifi-scaninfo",
    shape: OutputShape::JsonText,
};
