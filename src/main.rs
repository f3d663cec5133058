use see3cam_pixel_rs::logger;
use see3cam_pixel_rs::pixel_pipeline::{
    ConversionSession, ConvertedFrame, NegotiatedFormat, PixelFormat,
};

use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting see3cam_pixel demo...");

    let format = NegotiatedFormat::builder()
        .pixel_format(PixelFormat::Y12)
        .width(640)
        .height(480)
        .fps(30)
        .build();
    let mut session = ConversionSession::new(format, "See3CAM_CU55")?;

    info!("Conversion session ready");
    info!("Format: {}", session.format().pixel_format.fourcc());

    // Synthetic packed Y12 ramp, two samples per three bytes.
    let packed: Vec<u8> = (0..640 * 480 * 3 / 2).map(|i| (i % 256) as u8).collect();

    match session.convert_frame(&packed) {
        Ok(ConvertedFrame::Gray(frame)) => {
            info!("Preview frame ready: {}x{}", frame.width, frame.height)
        }
        Ok(_) => error!("Y12 session produced a non-grayscale frame"),
        Err(e) => error!("Conversion failed: {}", e),
    }

    let still = session.convert_y12_for_still(&packed)?;
    info!("Raw still buffer: {} bytes", still.len());

    Ok(())
}
