use utils::traits::dynamic_sized_packet::DynamicSizedPacket;

use crate::header::{FrameHeader, FrameSyntax, FrameType, SyncInfo};

/// One syncframe: the bytes `[offset, offset + data.len())` of the input.
#[derive(Debug, Clone)]
pub struct Frame {
    pub offset: u64,
    pub sync_info: SyncInfo,
    pub header: FrameHeader,
    pub data: Vec<u8>,
}

impl Frame {
    pub fn frame_type(&self) -> FrameType {
        self.sync_info.frame_type
    }

    pub fn syntax(&self) -> FrameSyntax {
        self.sync_info.syntax
    }

    pub fn is_dependent(&self) -> bool {
        self.syntax() == FrameSyntax::Eac3 && self.frame_type() == FrameType::Dependent
    }

    pub fn end_offset(&self) -> u64 {
        self.offset + self.data.len() as u64
    }
}

impl DynamicSizedPacket for Frame {
    fn get_packet_bytes_count(&self) -> usize {
        self.sync_info.frame_bytes
    }
}
