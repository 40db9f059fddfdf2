// Generates the ConceptSearch service stubs. Message types are declared by
// hand in `src/proto.rs`, so no .proto file or protoc is involved.

fn main() {
    let search = tonic_build::manual::Method::builder()
        .name("search")
        .route_name("Search")
        .input_type("crate::proto::SearchConceptsRequest")
        .output_type("crate::proto::SearchConceptsResponse")
        .codec_path("tonic::codec::ProstCodec")
        .build();

    let service = tonic_build::manual::Service::builder()
        .name("ConceptSearch")
        .package("conceptsearch")
        .method(search)
        .build();

    tonic_build::manual::Builder::new().compile(&[service]);
}
