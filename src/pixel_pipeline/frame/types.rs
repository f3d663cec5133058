use crate::pixel_pipeline::common::error::{ConversionError, Result};

/// Pixel formats a capture session can be negotiated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// YUV 4:2:2, `U Y0 V Y1` byte order.
    Uyvy,
    /// YUV 4:2:2, `Y0 U Y1 V` byte order.
    Yuy2,
    /// Packed 12-bit grayscale, two samples per three bytes.
    Y12,
    /// 16-bit grayscale, little-endian, 12 significant bits at most.
    Y16,
}

impl PixelFormat {
    /// Parses a V4L2 FourCC string. Codes shorter than four characters are
    /// padded with trailing spaces on the wire ("Y12 ", "Y16 ").
    pub fn from_fourcc(tag: &str) -> Result<Self> {
        match tag.trim_end() {
            "UYVY" => Ok(Self::Uyvy),
            "YUY2" => Ok(Self::Yuy2),
            "Y12" => Ok(Self::Y12),
            "Y16" => Ok(Self::Y16),
            _ => Err(ConversionError::UnrecognizedFormat(tag.to_string())),
        }
    }

    pub fn fourcc(&self) -> &'static str {
        match self {
            Self::Uyvy => "UYVY",
            Self::Yuy2 => "YUY2",
            Self::Y12 => "Y12 ",
            Self::Y16 => "Y16 ",
        }
    }

    /// Byte length of one raw frame at the given dimensions.
    pub fn frame_len(&self, width: usize, height: usize) -> usize {
        match self {
            Self::Uyvy | Self::Yuy2 | Self::Y16 => width * height * 2,
            Self::Y12 => width * height * 3 / 2,
        }
    }
}

/// Y16 cameras differ in how their 16-bit payload is encoded, so the decoding
/// strategy is chosen per model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraVariant {
    /// 10-bit grayscale sensor, scaled linearly for preview.
    See3Cam20Cug,
    /// RGIR Bayer sensor carrying interleaved color and infrared samples.
    See3CamCu40,
    /// Any other Y16 device, assumed to fill ~12 bits.
    OtherY16,
}

impl CameraVariant {
    /// Resolves the variant from the device display name reported by the
    /// driver. Names embed the model string, e.g.
    /// "See3CAM_CU40: See3CAM_CU40".
    pub fn from_device_name(device_name: &str) -> Self {
        if device_name.contains("See3CAM_20CUG") {
            Self::See3Cam20Cug
        } else if device_name.contains("See3CAM_CU40") {
            Self::See3CamCu40
        } else {
            Self::OtherY16
        }
    }
}

/// Output format negotiated with the device for one capture session.
#[derive(Debug, Clone)]
pub struct NegotiatedFormat {
    pub pixel_format: PixelFormat,
    pub width: usize,
    pub height: usize,
    pub fps: u32,
}

impl Default for NegotiatedFormat {
    fn default() -> Self {
        Self {
            pixel_format: PixelFormat::Y12,
            width: 640,
            height: 480,
            fps: 30,
        }
    }
}

impl NegotiatedFormat {
    pub fn builder() -> NegotiatedFormatBuilder {
        NegotiatedFormatBuilder::default()
    }
}

#[derive(Default)]
pub struct NegotiatedFormatBuilder {
    pixel_format: Option<PixelFormat>,
    width: Option<usize>,
    height: Option<usize>,
    fps: Option<u32>,
}

impl NegotiatedFormatBuilder {
    pub fn pixel_format(mut self, pixel_format: PixelFormat) -> Self {
        self.pixel_format = Some(pixel_format);
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    pub fn fps(mut self, fps: u32) -> Self {
        self.fps = Some(fps);
        self
    }

    pub fn build(self) -> NegotiatedFormat {
        let default = NegotiatedFormat::default();
        NegotiatedFormat {
            pixel_format: self.pixel_format.unwrap_or(default.pixel_format),
            width: self.width.unwrap_or(default.width),
            height: self.height.unwrap_or(default.height),
            fps: self.fps.unwrap_or(default.fps),
        }
    }
}

/// Row-major 8-bit grayscale grid. Also used for the infrared plane split
/// out of RGIR frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayFrame {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl GrayFrame {
    pub fn zeroed(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }
}

/// Row-major interleaved color grid, three bytes per pixel in B,G,R order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BgrFrame {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}
