/// A 24-bit packed colour, `0xRRGGBB`. There is no alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb(u32);

impl Rgb {
    /// Opaque white.
    pub const WHITE: Rgb = Rgb(0x00FF_FFFF);

    /// Black.
    pub const BLACK: Rgb = Rgb(0);

    const RED_MASK: u32 = 0x00FF_0000;
    const GREEN_MASK: u32 = 0x0000_FF00;
    const BLUE_MASK: u32 = 0x0000_00FF;

    /// Creates a colour from its channels.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Creates a colour from a packed integer, ignoring bits above the blue, green
    /// and red bytes.
    #[must_use]
    pub const fn from_packed(packed: u32) -> Self {
        Self(packed & 0x00FF_FFFF)
    }

    /// Returns the packed `0xRRGGBB` value.
    #[must_use]
    pub const fn packed(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn red(self) -> u8 {
        ((self.0 & Self::RED_MASK) >> 16) as u8
    }

    #[must_use]
    pub const fn green(self) -> u8 {
        ((self.0 & Self::GREEN_MASK) >> 8) as u8
    }

    #[must_use]
    pub const fn blue(self) -> u8 {
        (self.0 & Self::BLUE_MASK) as u8
    }

    /// Channel-wise mean of four colours, rounded down.
    ///
    /// Each channel is masked and summed on its own so a carry in one channel
    /// cannot spill into its neighbour.
    #[must_use]
    pub fn average(colors: [Rgb; 4]) -> Rgb {
        let channel = |mask: u32| (colors.iter().map(|c| c.0 & mask).sum::<u32>() / 4) & mask;
        Rgb(channel(Self::RED_MASK) | channel(Self::GREEN_MASK) | channel(Self::BLUE_MASK))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.red(), c.green(), c.blue()]
    }
}
