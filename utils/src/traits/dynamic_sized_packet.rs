/// packets whose byte length is only known after their header is parsed
pub trait DynamicSizedPacket {
    fn get_packet_bytes_count(&self) -> usize;
}
