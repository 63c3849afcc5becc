// Common test fixtures: hand-written stand-ins for compiler-emitted schema
// code. A four-version telemetry schema exercising struct and union
// evolution: a widened field, a version-bumped nested type, and a defaulted
// field/alternative introduced at V4.

#![allow(dead_code)]

pub mod telemetry {
    use strata_codec::codec::{read_tag, write_tag, WireCodec};
    use strata_codec::migration::{MigrateChain, MigrateFrom, VersionedSchema};
    use strata_codec::wire::{WireRead, WireWrite};
    use strata_codec::CodecResult;

    // ---------------------------------------------------------------------
    // Probe: nested schema type. `offset` widens from i32 to i64 at V2.
    // ---------------------------------------------------------------------

    #[derive(Debug, Clone, PartialEq)]
    pub struct ProbeV1 {
        pub offset: i32,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct ProbeV2 {
        pub offset: i64,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct ProbeV3 {
        pub offset: i64,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct ProbeV4 {
        pub offset: i64,
    }

    impl WireCodec for ProbeV1 {
        fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
            Ok(Self { offset: i32::read(reader)? })
        }

        fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
            self.offset.write(writer)
        }
    }

    impl WireCodec for ProbeV2 {
        fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
            Ok(Self { offset: i64::read(reader)? })
        }

        fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
            self.offset.write(writer)
        }
    }

    impl WireCodec for ProbeV3 {
        fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
            Ok(Self { offset: i64::read(reader)? })
        }

        fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
            self.offset.write(writer)
        }
    }

    impl WireCodec for ProbeV4 {
        fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
            Ok(Self { offset: i64::read(reader)? })
        }

        fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
            self.offset.write(writer)
        }
    }

    impl MigrateFrom<ProbeV1> for ProbeV2 {
        fn migrate_from(prev: ProbeV1) -> Self {
            Self { offset: i64::from(prev.offset) }
        }
    }

    impl MigrateFrom<ProbeV2> for ProbeV3 {
        fn migrate_from(prev: ProbeV2) -> Self {
            Self { offset: prev.offset }
        }
    }

    impl MigrateFrom<ProbeV3> for ProbeV4 {
        fn migrate_from(prev: ProbeV3) -> Self {
            Self { offset: prev.offset }
        }
    }

    // ---------------------------------------------------------------------
    // Calibration: schema introduced at V4.
    // ---------------------------------------------------------------------

    #[derive(Debug, Clone, PartialEq)]
    pub struct CalibrationV4 {
        pub scale: i32,
    }

    impl CalibrationV4 {
        /// Value supplied for records migrated from versions that predate
        /// calibration.
        pub fn default_for_migration() -> Self {
            Self { scale: 1 }
        }
    }

    impl WireCodec for CalibrationV4 {
        fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
            Ok(Self { scale: i32::read(reader)? })
        }

        fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
            self.scale.write(writer)
        }
    }

    // ---------------------------------------------------------------------
    // Reading: struct family. V4 introduces the `calibration` field.
    // ---------------------------------------------------------------------

    #[derive(Debug, Clone, PartialEq)]
    pub struct ReadingV1 {
        pub device: i32,
        pub count: i64,
        pub probe: ProbeV1,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct ReadingV2 {
        pub device: i32,
        pub count: i64,
        pub probe: ProbeV2,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct ReadingV3 {
        pub device: i32,
        pub count: i64,
        pub probe: ProbeV3,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct ReadingV4 {
        pub device: i32,
        pub count: i64,
        pub probe: ProbeV4,
        pub calibration: CalibrationV4,
    }

    impl WireCodec for ReadingV1 {
        fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
            Ok(Self {
                device: i32::read(reader)?,
                count: i64::read(reader)?,
                probe: ProbeV1::read(reader)?,
            })
        }

        fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
            self.device.write(writer)?;
            self.count.write(writer)?;
            self.probe.write(writer)
        }
    }

    impl WireCodec for ReadingV2 {
        fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
            Ok(Self {
                device: i32::read(reader)?,
                count: i64::read(reader)?,
                probe: ProbeV2::read(reader)?,
            })
        }

        fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
            self.device.write(writer)?;
            self.count.write(writer)?;
            self.probe.write(writer)
        }
    }

    impl WireCodec for ReadingV3 {
        fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
            Ok(Self {
                device: i32::read(reader)?,
                count: i64::read(reader)?,
                probe: ProbeV3::read(reader)?,
            })
        }

        fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
            self.device.write(writer)?;
            self.count.write(writer)?;
            self.probe.write(writer)
        }
    }

    impl WireCodec for ReadingV4 {
        fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
            Ok(Self {
                device: i32::read(reader)?,
                count: i64::read(reader)?,
                probe: ProbeV4::read(reader)?,
                calibration: CalibrationV4::read(reader)?,
            })
        }

        fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
            self.device.write(writer)?;
            self.count.write(writer)?;
            self.probe.write(writer)?;
            self.calibration.write(writer)
        }
    }

    impl MigrateFrom<ReadingV1> for ReadingV2 {
        fn migrate_from(prev: ReadingV1) -> Self {
            Self {
                device: prev.device,
                count: prev.count,
                probe: ProbeV2::migrate_from(prev.probe),
            }
        }
    }

    impl MigrateFrom<ReadingV2> for ReadingV3 {
        fn migrate_from(prev: ReadingV2) -> Self {
            Self {
                device: prev.device,
                count: prev.count,
                probe: ProbeV3::migrate_from(prev.probe),
            }
        }
    }

    impl MigrateFrom<ReadingV3> for ReadingV4 {
        fn migrate_from(prev: ReadingV3) -> Self {
            Self {
                device: prev.device,
                count: prev.count,
                probe: ProbeV4::migrate_from(prev.probe),
                calibration: CalibrationV4::default_for_migration(),
            }
        }
    }

    impl MigrateChain<ReadingV2> for ReadingV1 {
        const CHAIN_LENGTH: usize = 1;

        fn migrate_chain(self) -> ReadingV2 {
            ReadingV2::migrate_from(self)
        }
    }

    impl MigrateChain<ReadingV3> for ReadingV1 {
        const CHAIN_LENGTH: usize = 2;

        fn migrate_chain(self) -> ReadingV3 {
            ReadingV3::migrate_from(ReadingV2::migrate_from(self))
        }
    }

    impl MigrateChain<ReadingV4> for ReadingV1 {
        const CHAIN_LENGTH: usize = 3;

        fn migrate_chain(self) -> ReadingV4 {
            ReadingV4::migrate_from(ReadingV3::migrate_from(ReadingV2::migrate_from(self)))
        }
    }

    impl MigrateChain<ReadingV3> for ReadingV2 {
        const CHAIN_LENGTH: usize = 1;

        fn migrate_chain(self) -> ReadingV3 {
            ReadingV3::migrate_from(self)
        }
    }

    impl MigrateChain<ReadingV4> for ReadingV2 {
        const CHAIN_LENGTH: usize = 2;

        fn migrate_chain(self) -> ReadingV4 {
            ReadingV4::migrate_from(ReadingV3::migrate_from(self))
        }
    }

    impl MigrateChain<ReadingV4> for ReadingV3 {
        const CHAIN_LENGTH: usize = 1;

        fn migrate_chain(self) -> ReadingV4 {
            ReadingV4::migrate_from(self)
        }
    }

    // ---------------------------------------------------------------------
    // Signal: union family. V4 introduces the Calibration alternative.
    // Tags are the declaration-order ordinals within each version.
    // ---------------------------------------------------------------------

    #[derive(Debug, Clone, PartialEq)]
    pub enum SignalV1 {
        Count(i32),
        Total(i64),
        Probe(ProbeV1),
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum SignalV2 {
        Count(i32),
        Total(i64),
        Probe(ProbeV2),
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum SignalV3 {
        Count(i32),
        Total(i64),
        Probe(ProbeV3),
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum SignalV4 {
        Count(i32),
        Total(i64),
        Probe(ProbeV4),
        Calibration(CalibrationV4),
    }

    impl WireCodec for SignalV1 {
        fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
            match read_tag(reader, 3)? {
                0 => Ok(Self::Count(i32::read(reader)?)),
                1 => Ok(Self::Total(i64::read(reader)?)),
                2 => Ok(Self::Probe(ProbeV1::read(reader)?)),
                _ => unreachable!("tag range checked by read_tag"),
            }
        }

        fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
            match self {
                Self::Count(value) => {
                    write_tag(writer, 0)?;
                    value.write(writer)
                }
                Self::Total(value) => {
                    write_tag(writer, 1)?;
                    value.write(writer)
                }
                Self::Probe(value) => {
                    write_tag(writer, 2)?;
                    value.write(writer)
                }
            }
        }
    }

    impl WireCodec for SignalV2 {
        fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
            match read_tag(reader, 3)? {
                0 => Ok(Self::Count(i32::read(reader)?)),
                1 => Ok(Self::Total(i64::read(reader)?)),
                2 => Ok(Self::Probe(ProbeV2::read(reader)?)),
                _ => unreachable!("tag range checked by read_tag"),
            }
        }

        fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
            match self {
                Self::Count(value) => {
                    write_tag(writer, 0)?;
                    value.write(writer)
                }
                Self::Total(value) => {
                    write_tag(writer, 1)?;
                    value.write(writer)
                }
                Self::Probe(value) => {
                    write_tag(writer, 2)?;
                    value.write(writer)
                }
            }
        }
    }

    impl WireCodec for SignalV3 {
        fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
            match read_tag(reader, 3)? {
                0 => Ok(Self::Count(i32::read(reader)?)),
                1 => Ok(Self::Total(i64::read(reader)?)),
                2 => Ok(Self::Probe(ProbeV3::read(reader)?)),
                _ => unreachable!("tag range checked by read_tag"),
            }
        }

        fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
            match self {
                Self::Count(value) => {
                    write_tag(writer, 0)?;
                    value.write(writer)
                }
                Self::Total(value) => {
                    write_tag(writer, 1)?;
                    value.write(writer)
                }
                Self::Probe(value) => {
                    write_tag(writer, 2)?;
                    value.write(writer)
                }
            }
        }
    }

    impl WireCodec for SignalV4 {
        fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
            match read_tag(reader, 4)? {
                0 => Ok(Self::Count(i32::read(reader)?)),
                1 => Ok(Self::Total(i64::read(reader)?)),
                2 => Ok(Self::Probe(ProbeV4::read(reader)?)),
                3 => Ok(Self::Calibration(CalibrationV4::read(reader)?)),
                _ => unreachable!("tag range checked by read_tag"),
            }
        }

        fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
            match self {
                Self::Count(value) => {
                    write_tag(writer, 0)?;
                    value.write(writer)
                }
                Self::Total(value) => {
                    write_tag(writer, 1)?;
                    value.write(writer)
                }
                Self::Probe(value) => {
                    write_tag(writer, 2)?;
                    value.write(writer)
                }
                Self::Calibration(value) => {
                    write_tag(writer, 3)?;
                    value.write(writer)
                }
            }
        }
    }

    impl MigrateFrom<SignalV1> for SignalV2 {
        fn migrate_from(prev: SignalV1) -> Self {
            match prev {
                SignalV1::Count(value) => Self::Count(value),
                SignalV1::Total(value) => Self::Total(value),
                SignalV1::Probe(value) => Self::Probe(ProbeV2::migrate_from(value)),
            }
        }
    }

    impl MigrateFrom<SignalV2> for SignalV3 {
        fn migrate_from(prev: SignalV2) -> Self {
            match prev {
                SignalV2::Count(value) => Self::Count(value),
                SignalV2::Total(value) => Self::Total(value),
                SignalV2::Probe(value) => Self::Probe(ProbeV3::migrate_from(value)),
            }
        }
    }

    // The Calibration alternative only ever arises from code written against
    // V4 directly; no V3 value maps to it.
    impl MigrateFrom<SignalV3> for SignalV4 {
        fn migrate_from(prev: SignalV3) -> Self {
            match prev {
                SignalV3::Count(value) => Self::Count(value),
                SignalV3::Total(value) => Self::Total(value),
                SignalV3::Probe(value) => Self::Probe(ProbeV4::migrate_from(value)),
            }
        }
    }

    impl MigrateChain<SignalV2> for SignalV1 {
        const CHAIN_LENGTH: usize = 1;

        fn migrate_chain(self) -> SignalV2 {
            SignalV2::migrate_from(self)
        }
    }

    impl MigrateChain<SignalV4> for SignalV1 {
        const CHAIN_LENGTH: usize = 3;

        fn migrate_chain(self) -> SignalV4 {
            SignalV4::migrate_from(SignalV3::migrate_from(SignalV2::migrate_from(self)))
        }
    }

    macro_rules! impl_versioned {
        ($($shape:ty => ($schema:literal, $version:literal, $current:literal)),* $(,)?) => {$(
            impl VersionedSchema for $shape {
                const SCHEMA: &'static str = $schema;
                const VERSION: u32 = $version;
                const IS_CURRENT: bool = $current;
            }
        )*};
    }

    impl_versioned!(
        ProbeV1 => ("Probe", 1, false),
        ProbeV2 => ("Probe", 2, false),
        ProbeV3 => ("Probe", 3, false),
        ProbeV4 => ("Probe", 4, true),
        CalibrationV4 => ("Calibration", 4, true),
        ReadingV1 => ("Reading", 1, false),
        ReadingV2 => ("Reading", 2, false),
        ReadingV3 => ("Reading", 3, false),
        ReadingV4 => ("Reading", 4, true),
        SignalV1 => ("Signal", 1, false),
        SignalV2 => ("Signal", 2, false),
        SignalV3 => ("Signal", 3, false),
        SignalV4 => ("Signal", 4, true),
    );
}
