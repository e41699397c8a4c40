/// 由財報數列計算年複合成長率
pub mod growth;
