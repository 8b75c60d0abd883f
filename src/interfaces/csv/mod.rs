pub mod tender_writer;
